//! Rust declarations for the Verilog Procedural Interface ABI.
//!
//! This file was adapted from the `vpi_user.h` header standardized by IEEE
//! 1364 and covers the subset of the interface used by the cosimulation
//! bridge: system task registration, callback registration, argument
//! traversal, value access and simulation control.
//!
//! The layout and format of this document are meant to mimic the original
//! header in order to ease maintenance.

#![allow(non_camel_case_types, non_upper_case_globals, dead_code)]

use libc::c_double;

/* Sized variables */

pub type PLI_INT32  = i32;
pub type PLI_UINT32 = u32;
pub type PLI_INT16  = i16;
pub type PLI_UINT16 = u16;
pub type PLI_BYTE8  = i8;
pub type PLI_UBYTE8 = u8;

/* Opaque object handle */

pub type vpiHandle = *mut PLI_UINT32;

//############################ OBJECT TYPES ###############################

pub const vpiAlways:        PLI_INT32 = 1;
pub const vpiConstant:      PLI_INT32 = 7;
pub const vpiFunction:      PLI_INT32 = 20;
pub const vpiIntegerVar:    PLI_INT32 = 25;
pub const vpiIterator:      PLI_INT32 = 27;
pub const vpiModule:        PLI_INT32 = 32;
pub const vpiNet:           PLI_INT32 = 36;
pub const vpiNetBit:        PLI_INT32 = 37;
pub const vpiPort:          PLI_INT32 = 44;
pub const vpiReg:           PLI_INT32 = 48;
pub const vpiRegBit:        PLI_INT32 = 49;
pub const vpiSysFuncCall:   PLI_INT32 = 56;
pub const vpiSysTaskCall:   PLI_INT32 = 57;
pub const vpiTask:          PLI_INT32 = 59;
pub const vpiUserSystf:     PLI_INT32 = 67;

//########################## OBJECT PROPERTIES ############################

pub const vpiUndefined:     PLI_INT32 = -1;
pub const vpiType:          PLI_INT32 = 1;
pub const vpiName:          PLI_INT32 = 2;
pub const vpiFullName:      PLI_INT32 = 3;
pub const vpiSize:          PLI_INT32 = 4;
pub const vpiFile:          PLI_INT32 = 5;
pub const vpiLineNo:        PLI_INT32 = 6;
pub const vpiTimeUnit:      PLI_INT32 = 11;
pub const vpiTimePrecision: PLI_INT32 = 12;

//####################### ONE-TO-MANY RELATIONSHIPS #######################

pub const vpiParent:        PLI_INT32 = 81;
pub const vpiScope:         PLI_INT32 = 84;
pub const vpiSysTfCall:     PLI_INT32 = 85;
pub const vpiArgument:      PLI_INT32 = 89;
pub const vpiInternalScope: PLI_INT32 = 92;

//############################# TIME TYPES ################################

pub const vpiScaledRealTime: PLI_INT32 = 1;
pub const vpiSimTime:        PLI_INT32 = 2;
pub const vpiSuppressTime:   PLI_INT32 = 3;

//############################ VALUE FORMATS ##############################

pub const vpiBinStrVal:   PLI_INT32 = 1;
pub const vpiOctStrVal:   PLI_INT32 = 2;
pub const vpiDecStrVal:   PLI_INT32 = 3;
pub const vpiHexStrVal:   PLI_INT32 = 4;
pub const vpiScalarVal:   PLI_INT32 = 5;
pub const vpiIntVal:      PLI_INT32 = 6;
pub const vpiRealVal:     PLI_INT32 = 7;
pub const vpiStringVal:   PLI_INT32 = 8;
pub const vpiVectorVal:   PLI_INT32 = 9;
pub const vpiStrengthVal: PLI_INT32 = 10;
pub const vpiTimeVal:     PLI_INT32 = 11;
pub const vpiObjTypeVal:  PLI_INT32 = 12;
pub const vpiSuppressVal: PLI_INT32 = 13;

//############################# DELAY MODES ###############################

pub const vpiNoDelay:            PLI_INT32 = 1;
pub const vpiInertialDelay:      PLI_INT32 = 2;
pub const vpiTransportDelay:     PLI_INT32 = 3;
pub const vpiPureTransportDelay: PLI_INT32 = 4;

//########################## SYSTF TYPES ##################################

pub const vpiSysTask: PLI_INT32 = 1;
pub const vpiSysFunc: PLI_INT32 = 2;

//######################### CALLBACK REASONS ##############################

pub const cbValueChange:       PLI_INT32 = 1;
pub const cbStmt:              PLI_INT32 = 2;
pub const cbForce:             PLI_INT32 = 3;
pub const cbRelease:           PLI_INT32 = 4;
pub const cbAtStartOfSimTime:  PLI_INT32 = 5;
pub const cbReadWriteSynch:    PLI_INT32 = 6;
pub const cbReadOnlySynch:     PLI_INT32 = 7;
pub const cbNextSimTime:       PLI_INT32 = 8;
pub const cbAfterDelay:        PLI_INT32 = 9;
pub const cbEndOfCompile:      PLI_INT32 = 10;
pub const cbStartOfSimulation: PLI_INT32 = 11;
pub const cbEndOfSimulation:   PLI_INT32 = 12;

//######################## SIMULATION CONTROL #############################

pub const vpiStop:                PLI_INT32 = 66;
pub const vpiFinish:              PLI_INT32 = 67;
pub const vpiReset:               PLI_INT32 = 68;
pub const vpiSetInteractiveScope: PLI_INT32 = 69;

//############################# STRUCTURES ################################

// typedef struct t_vpi_time {
//     PLI_INT32  type;      /* [vpiScaledRealTime, vpiSimTime, vpiSuppressTime] */
//     PLI_UINT32 high, low; /* for vpiSimTime */
//     double     real;      /* for vpiScaledRealTime */
// } s_vpi_time, *p_vpi_time;
#[repr(C)]
#[derive(Clone, Copy)]
pub struct t_vpi_time {
    pub type_: PLI_INT32,
    pub high:  PLI_UINT32,
    pub low:   PLI_UINT32,
    pub real:  c_double,
}

pub type s_vpi_time = t_vpi_time;
pub type p_vpi_time = *mut t_vpi_time;

// typedef struct t_vpi_vecval {
//     PLI_INT32 aval, bval; /* bit encoding: ab: 00=0, 10=1, 11=X, 01=Z */
// } s_vpi_vecval, *p_vpi_vecval;
#[repr(C)]
#[derive(Clone, Copy)]
pub struct t_vpi_vecval {
    pub aval: PLI_INT32,
    pub bval: PLI_INT32,
}

pub type s_vpi_vecval = t_vpi_vecval;
pub type p_vpi_vecval = *mut t_vpi_vecval;

// typedef struct t_vpi_strengthval {
//     PLI_INT32 logic;
//     PLI_INT32 s0, s1;
// } s_vpi_strengthval, *p_vpi_strengthval;
#[repr(C)]
#[derive(Clone, Copy)]
pub struct t_vpi_strengthval {
    pub logic: PLI_INT32,
    pub s0:    PLI_INT32,
    pub s1:    PLI_INT32,
}

pub type s_vpi_strengthval = t_vpi_strengthval;
pub type p_vpi_strengthval = *mut t_vpi_strengthval;

#[repr(C)]
#[derive(Clone, Copy)]
pub union t_vpi_value_union {
    pub str:      *mut PLI_BYTE8,
    pub scalar:   PLI_INT32,
    pub integer:  PLI_INT32,
    pub real:     c_double,
    pub time:     p_vpi_time,
    pub vector:   p_vpi_vecval,
    pub strength: p_vpi_strengthval,
    pub misc:     *mut PLI_BYTE8,
}

// typedef struct t_vpi_value {
//     PLI_INT32 format;
//     union { ... } value;
// } s_vpi_value, *p_vpi_value;
#[repr(C)]
#[derive(Clone, Copy)]
pub struct t_vpi_value {
    pub format: PLI_INT32,
    pub value:  t_vpi_value_union,
}

pub type s_vpi_value = t_vpi_value;
pub type p_vpi_value = *mut t_vpi_value;

// typedef struct t_cb_data {
//     PLI_INT32    reason;
//     PLI_INT32    (*cb_rtn)(struct t_cb_data *);
//     vpiHandle    obj;
//     p_vpi_time   time;
//     p_vpi_value  value;
//     PLI_INT32    index;
//     PLI_BYTE8    *user_data;
// } s_cb_data, *p_cb_data;
#[repr(C)]
#[derive(Clone, Copy)]
pub struct t_cb_data {
    pub reason:    PLI_INT32,
    pub cb_rtn:    Option<extern "C" fn(p_cb_data) -> PLI_INT32>,
    pub obj:       vpiHandle,
    pub time:      p_vpi_time,
    pub value:     p_vpi_value,
    pub index:     PLI_INT32,
    pub user_data: *mut PLI_BYTE8,
}

pub type s_cb_data = t_cb_data;
pub type p_cb_data = *mut t_cb_data;

// typedef struct t_vpi_systf_data {
//     PLI_INT32    type;        /* [vpiSysTask, vpiSysFunc] */
//     PLI_INT32    sysfunctype;
//     PLI_BYTE8    *tfname;
//     PLI_INT32    (*calltf)(PLI_BYTE8 *);
//     PLI_INT32    (*compiletf)(PLI_BYTE8 *);
//     PLI_INT32    (*sizetf)(PLI_BYTE8 *);
//     PLI_BYTE8    *user_data;
// } s_vpi_systf_data, *p_vpi_systf_data;
#[repr(C)]
#[derive(Clone, Copy)]
pub struct t_vpi_systf_data {
    pub type_:       PLI_INT32,
    pub sysfunctype: PLI_INT32,
    pub tfname:      *const PLI_BYTE8,
    pub calltf:      Option<extern "C" fn(*mut PLI_BYTE8) -> PLI_INT32>,
    pub compiletf:   Option<extern "C" fn(*mut PLI_BYTE8) -> PLI_INT32>,
    pub sizetf:      Option<extern "C" fn(*mut PLI_BYTE8) -> PLI_INT32>,
    pub user_data:   *mut PLI_BYTE8,
}

pub type s_vpi_systf_data = t_vpi_systf_data;
pub type p_vpi_systf_data = *mut t_vpi_systf_data;

//############################## FUNCTIONS ################################

extern "C" {
    // Registration:
    pub fn vpi_register_systf(systf_data_p: p_vpi_systf_data) -> vpiHandle;

    pub fn vpi_register_cb(cb_data_p: p_cb_data) -> vpiHandle;

    pub fn vpi_remove_cb(cb_obj: vpiHandle) -> PLI_INT32;

    // Traversal:
    pub fn vpi_handle(type_: PLI_INT32, refHandle: vpiHandle) -> vpiHandle;

    pub fn vpi_iterate(type_: PLI_INT32, refHandle: vpiHandle) -> vpiHandle;

    pub fn vpi_scan(iterator: vpiHandle) -> vpiHandle;

    // Properties:
    pub fn vpi_get(property: PLI_INT32, object: vpiHandle) -> PLI_INT32;

    pub fn vpi_get_str(property: PLI_INT32, object: vpiHandle) -> *mut PLI_BYTE8;

    // Value access:
    pub fn vpi_get_value(expr: vpiHandle, value_p: p_vpi_value);

    pub fn vpi_put_value(object: vpiHandle,
                         value_p: p_vpi_value,
                         time_p: p_vpi_time,
                         flags: PLI_INT32) -> vpiHandle;

    // Time:
    pub fn vpi_get_time(object: vpiHandle, time_p: p_vpi_time);

    // Utility:
    pub fn vpi_printf(format: *const PLI_BYTE8, ...) -> PLI_INT32;

    pub fn vpi_control(operation: PLI_INT32, ...) -> PLI_INT32;

    pub fn vpi_free_object(object: vpiHandle) -> PLI_INT32;
}
