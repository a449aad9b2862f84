//! USB device and interface class codes.
//!
//! The same code space is used for `bDeviceClass` in the device descriptor and
//! `bInterfaceClass` in the interface descriptor. See <https://www.usb.org/defined-class-codes>.

use crate::macros::usb_value;

usb_value! {
    /// A USB class code.
    ///
    /// Real devices regularly report codes that have no entry here (newer classes, or
    /// multi-vendor codes), so any byte may be held; such values describe as `""`.
    pub struct Class;

    /// Class information lives in each interface descriptor.
    PER_INTERFACE = 0x00 => "per-interface",
    AUDIO = 0x01 => "audio",
    /// Communications and CDC control.
    COMM = 0x02 => "communications",
    HID = 0x03 => "human interface device",
    PRINTER = 0x07 => "printer dclass",
    /// Still imaging, via the Picture Transfer Protocol.
    PTP = 0x06 => "picture transfer protocol",
    MASS_STORAGE = 0x08 => "mass storage",
    HUB = 0x09 => "hub",
    /// CDC data.
    DATA = 0x0a => "data",
    WIRELESS = 0xe0 => "wireless",
    /// Application specific (DFU, IrDA bridge, test and measurement).
    APPLICATION = 0xfe => "application",
    VENDOR_SPEC = 0xff => "vendor-specific",
}
