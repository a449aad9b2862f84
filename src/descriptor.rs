//! Descriptor type tags, and the standard descriptors whose fields use this crate's value types.

use binrw::{binrw, io::Cursor, BinRead};
use log::{debug, error, warn};
use tap::TapFallible;

use crate::{
    class::Class,
    convenience::{describe_endpoint, format_bytes_with_elision},
    endpoint::{EndpointAddress, EndpointAttributes},
    macros::usb_value,
    UsbResult,
};

usb_value! {
    /// The `bDescriptorType` tag that opens every descriptor.
    ///
    /// This is only the tag; it says nothing about the descriptor's length or contents.
    pub struct DescriptorType;

    DEVICE = 0x01 => "device",
    CONFIG = 0x02 => "configuration",
    STRING = 0x03 => "string",
    INTERFACE = 0x04 => "interface",
    ENDPOINT = 0x05 => "endpoint",
    /// Class descriptor from the HID 1.11 specification, §7.1.
    HID = 0x21 => "HID",
    REPORT = 0x22 => "HID report",
    PHYSICAL = 0x23 => "physical",
    HUB = 0x29 => "hub",
}

/// Logs (but otherwise tolerates) a descriptor whose tag is not the one its layout implies.
fn check_descriptor_type(actual: DescriptorType, expected: DescriptorType) {
    if actual != expected {
        warn!(
            "Read a {} descriptor whose bDescriptorType is {:?}",
            expected, actual,
        );
    }
}

/// Standard device descriptor [USB 2.0§9.6.1].
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
#[allow(non_snake_case)]
#[binrw]
// USB is little-endian [USB 2.0§8.1]
#[brw(little)]
pub struct DeviceDescriptor {
    pub bLength: u8,
    pub bDescriptorType: DescriptorType,
    pub bcdUSB: u16,
    pub bDeviceClass: Class,
    pub bDeviceSubClass: u8,
    pub bDeviceProtocol: u8,
    pub bMaxPacketSize0: u8,
    pub idVendor: u16,
    pub idProduct: u16,
    pub bcdDevice: u16,
    pub iManufacturer: u8,
    pub iProduct: u8,
    pub iSerialNumber: u8,
    pub bNumConfigurations: u8,
}

impl DeviceDescriptor {
    pub const LENGTH: usize = 18;

    /// Reads a device descriptor from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> UsbResult<Self> {
        let desc = Self::read(&mut Cursor::new(bytes)).tap_err(|e| {
            error!(
                "Error reading device descriptor from {}: {}",
                format_bytes_with_elision(bytes),
                e
            )
        })?;
        check_descriptor_type(desc.bDescriptorType, DescriptorType::DEVICE);

        debug!(
            "Device {:04x}:{:04x}, class {:?}, {} configuration(s)",
            desc.idVendor, desc.idProduct, desc.bDeviceClass, desc.bNumConfigurations,
        );

        Ok(desc)
    }
}

/// Standard configuration descriptor [USB 2.0§9.6.3].
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
#[allow(non_snake_case)]
#[binrw]
#[brw(little)]
pub struct ConfigurationDescriptor {
    pub bLength: u8,
    pub bDescriptorType: DescriptorType,
    /// Length of this descriptor plus every interface, endpoint and class descriptor after it.
    pub wTotalLength: u16,
    pub bNumInterfaces: u8,
    pub bConfigurationValue: u8,
    pub iConfiguration: u8,
    pub bmAttributes: u8,
    /// In units of 2mA.
    pub bMaxPower: u8,
}

impl ConfigurationDescriptor {
    pub const LENGTH: usize = 9;

    /// Reads a configuration descriptor from the start of `bytes`. Only the descriptor itself is
    /// read, not the interfaces that follow it.
    pub fn from_bytes(bytes: &[u8]) -> UsbResult<Self> {
        let desc = Self::read(&mut Cursor::new(bytes)).tap_err(|e| {
            error!(
                "Error reading configuration descriptor from {}: {}",
                format_bytes_with_elision(bytes),
                e
            )
        })?;
        check_descriptor_type(desc.bDescriptorType, DescriptorType::CONFIG);

        Ok(desc)
    }
}

/// Standard interface descriptor [USB 2.0§9.6.5].
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
#[allow(non_snake_case)]
#[binrw]
#[brw(little)]
pub struct InterfaceDescriptor {
    pub bLength: u8,
    pub bDescriptorType: DescriptorType,
    pub bInterfaceNumber: u8,
    pub bAlternateSetting: u8,
    pub bNumEndpoints: u8,
    pub bInterfaceClass: Class,
    pub bInterfaceSubClass: u8,
    pub bInterfaceProtocol: u8,
    pub iInterface: u8,
}

impl InterfaceDescriptor {
    pub const LENGTH: usize = 9;

    /// Reads an interface descriptor from the start of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> UsbResult<Self> {
        let desc = Self::read(&mut Cursor::new(bytes)).tap_err(|e| {
            error!(
                "Error reading interface descriptor from {}: {}",
                format_bytes_with_elision(bytes),
                e
            )
        })?;
        check_descriptor_type(desc.bDescriptorType, DescriptorType::INTERFACE);

        Ok(desc)
    }
}

/// Standard endpoint descriptor [USB 2.0§9.6.6].
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
#[allow(non_snake_case)]
#[binrw]
#[brw(little)]
pub struct EndpointDescriptor {
    pub bLength: u8,
    pub bDescriptorType: DescriptorType,
    pub bEndpointAddress: EndpointAddress,
    pub bmAttributes: EndpointAttributes,
    pub wMaxPacketSize: u16,
    pub bInterval: u8,
}

impl EndpointDescriptor {
    pub const LENGTH: usize = 7;

    /// Reads an endpoint descriptor from the start of `bytes`.
    ///
    /// Odd bit patterns in the address and attributes are kept as-is; see
    /// [decode_endpoint_attributes](crate::endpoint::decode_endpoint_attributes).
    pub fn from_bytes(bytes: &[u8]) -> UsbResult<Self> {
        let desc = Self::read(&mut Cursor::new(bytes)).tap_err(|e| {
            error!(
                "Error reading endpoint descriptor from {}: {}",
                format_bytes_with_elision(bytes),
                e
            )
        })?;
        check_descriptor_type(desc.bDescriptorType, DescriptorType::ENDPOINT);

        debug!("Endpoint {}", describe_endpoint(&desc));

        Ok(desc)
    }
}
