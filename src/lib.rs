//! Typed values for the USB protocol's descriptor and control-request fields.
//!
//! Device and interface classes, descriptor type tags, endpoint direction, transfer type,
//! isochronous sync and usage types, and control-request type and recipient each get their own
//! newtype over the protocol byte. Each has associated constants carrying the codes from the
//! USB specification, and renders through [Describe] and [Display](std::fmt::Display).
//!
//! The [endpoint] and [request] modules pack and unpack the bytes that multiplex several of
//! these values: `bEndpointAddress`, an endpoint's `bmAttributes`, and `bmRequestType`.
//! Decoding never fails, since descriptors come from real, sometimes odd, hardware. Encoding
//! only fails when a raw endpoint number does not fit in four bits.
//!
//! Nothing here performs I/O or holds state.
//!
//! ```
//! use usbtypes::{endpoint, Describe};
//!
//! let (direction, number) = endpoint::decode_endpoint_address(0x81);
//! assert_eq!((direction.describe(), number), ("IN", 1));
//! ```
//!
//! Section references in the form `[USB 2.0§9.6.6]` point into the Universal Serial Bus
//! Specification, Revision 2.0.

mod macros;

pub mod class;
pub mod convenience;
pub mod descriptor;
pub mod endpoint;
pub mod request;

mod describe;
mod error;

pub use class::Class;
pub use describe::Describe;
pub use descriptor::{
    ConfigurationDescriptor, DescriptorType, DeviceDescriptor, EndpointDescriptor,
    InterfaceDescriptor,
};
pub use endpoint::{
    EndpointAddress, EndpointAttributes, EndpointDirection, IsoSyncType, IsoUsageType,
    TransferType,
};
pub use error::{Error, UsbResult};
pub use request::{BmRequestType, Recipient, RequestType};
