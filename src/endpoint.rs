//! Endpoint addresses and endpoint attributes, and the values packed into them.
//!
//! `bEndpointAddress` [USB 2.0§9.6.6]:
//!
//! ```text
//!   7   6 5 4   3 2 1 0
//! [dir][ rsvd ][ number ]
//! ```
//!
//! `bmAttributes`:
//!
//! ```text
//!  7 6    5 4     3 2     1 0
//! [rsvd][usage][sync][transfer]
//! ```
//!
//! The sync and usage fields only mean anything for isochronous endpoints. Decoding hands them
//! back untouched either way; it is up to the caller to ignore them for other transfer types.

use std::fmt;

use binrw::binrw;
use log::{debug, trace};

use crate::{macros::usb_value, Describe, Error, UsbResult};

/// Isolates the direction bit of an endpoint address.
pub const ENDPOINT_DIRECTION_MASK: u8 = 0x80;
/// Isolates the endpoint number of an endpoint address.
pub const ENDPOINT_NUM_MASK: u8 = 0x0f;
const ENDPOINT_ADDRESS_RESERVED_MASK: u8 = 0x70;

/// Isolates the transfer type of an endpoint's attributes.
pub const TRANSFER_TYPE_MASK: u8 = 0x03;
/// Isolates the (pre-shifted) isochronous synchronization type of an endpoint's attributes.
pub const ISO_SYNC_TYPE_MASK: u8 = 0x0c;
/// Isolates the (pre-shifted) isochronous usage type of an endpoint's attributes.
pub const ISO_USAGE_TYPE_MASK: u8 = 0x30;
const ENDPOINT_ATTRIBUTES_RESERVED_MASK: u8 = 0xc0;

usb_value! {
    /// The direction bit of an endpoint address, also used as the direction bit of
    /// `bmRequestType`.
    pub struct EndpointDirection;

    /// Device to host.
    IN = 0x80 => "IN",
    /// Host to device.
    OUT = 0x00 => "OUT",
}

usb_value! {
    /// The transfer type in bits 0..=1 of an endpoint's attributes.
    pub struct TransferType;

    CONTROL = 0 => "control",
    ISOCHRONOUS = 1 => "isochronous",
    BULK = 2 => "bulk",
    INTERRUPT = 3 => "interrupt",
}

usb_value! {
    /// The synchronization type of an isochronous endpoint, stored already shifted into bits
    /// 2..=3 so it can be ORed straight into the attributes byte.
    pub struct IsoSyncType;

    NONE = 0 << 2 => "unsynchronized",
    ASYNC = 1 << 2 => "asynchronous",
    ADAPTIVE = 2 << 2 => "adaptive",
    SYNC = 3 << 2 => "synchronous",
}

usb_value! {
    /// The usage type of an isochronous endpoint, stored already shifted into bits 4..=5.
    pub struct IsoUsageType;

    DATA = 0 << 4 => "data",
    FEEDBACK = 1 << 4 => "feedback",
    IMPLICIT = 2 << 4 => "implicit data",
}

/// Splits an endpoint address into its direction and 4-bit endpoint number.
///
/// Never fails: the reserved bits 4..=6 are dropped (with a trace message if any are set).
pub fn decode_endpoint_address(address: u8) -> (EndpointDirection, u8) {
    if address & ENDPOINT_ADDRESS_RESERVED_MASK != 0 {
        trace!(
            "Endpoint address 0x{:02x} has reserved bits set (0x{:02x})",
            address,
            address & ENDPOINT_ADDRESS_RESERVED_MASK,
        );
    }

    (
        EndpointDirection(address & ENDPOINT_DIRECTION_MASK),
        address & ENDPOINT_NUM_MASK,
    )
}

/// Packs a direction and endpoint number into an endpoint address.
///
/// Endpoint numbers are four bits wide; anything above 15 is rejected with
/// [Error::InvalidArgument] rather than truncated.
pub fn encode_endpoint_address(direction: EndpointDirection, number: u8) -> UsbResult<u8> {
    if number & !ENDPOINT_NUM_MASK != 0 {
        let err = Error::InvalidArgument {
            field: "endpoint number",
            value: number,
            mask: ENDPOINT_NUM_MASK,
        };
        debug!("Refusing to encode endpoint address: {}", err);
        return Err(err);
    }

    Ok((direction.0 & ENDPOINT_DIRECTION_MASK) | number)
}

/// Splits an endpoint attributes byte into its transfer type, sync type and usage type.
///
/// The sync and usage types are returned in their shifted positions, whatever the transfer
/// type is.
pub fn decode_endpoint_attributes(attributes: u8) -> (TransferType, IsoSyncType, IsoUsageType) {
    let transfer_type = TransferType(attributes & TRANSFER_TYPE_MASK);
    let iso_bits = attributes & (ISO_SYNC_TYPE_MASK | ISO_USAGE_TYPE_MASK);

    if transfer_type != TransferType::ISOCHRONOUS && iso_bits != 0 {
        trace!(
            "Endpoint attributes 0x{:02x} carry isochronous bits on a {} endpoint",
            attributes,
            transfer_type,
        );
    }
    if attributes & ENDPOINT_ATTRIBUTES_RESERVED_MASK != 0 {
        trace!("Endpoint attributes 0x{:02x} have reserved bits set", attributes);
    }

    (
        transfer_type,
        IsoSyncType(attributes & ISO_SYNC_TYPE_MASK),
        IsoUsageType(attributes & ISO_USAGE_TYPE_MASK),
    )
}

/// Packs a transfer type, sync type and usage type into an endpoint attributes byte.
///
/// Pass [IsoSyncType::NONE] and [IsoUsageType::DATA] for non-isochronous endpoints; anything
/// else is still encoded, it just has no meaning. Each value is kept to its own field.
pub fn encode_endpoint_attributes(
    transfer_type: TransferType,
    sync_type: IsoSyncType,
    usage_type: IsoUsageType,
) -> u8 {
    (transfer_type.0 & TRANSFER_TYPE_MASK)
        | (sync_type.0 & ISO_SYNC_TYPE_MASK)
        | (usage_type.0 & ISO_USAGE_TYPE_MASK)
}

/// The `bEndpointAddress` byte of an endpoint descriptor.
#[binrw]
#[brw(little)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct EndpointAddress(pub u8);

impl EndpointAddress {
    /// The default control endpoint, which every device has.
    pub const CONTROL: EndpointAddress = EndpointAddress(0);

    pub fn new(direction: EndpointDirection, number: u8) -> UsbResult<Self> {
        encode_endpoint_address(direction, number).map(EndpointAddress)
    }

    pub fn direction(self) -> EndpointDirection {
        EndpointDirection(self.0 & ENDPOINT_DIRECTION_MASK)
    }

    pub fn number(self) -> u8 {
        self.0 & ENDPOINT_NUM_MASK
    }

    pub fn is_in(self) -> bool {
        self.direction() == EndpointDirection::IN
    }

    /// Same as [decode_endpoint_address].
    pub fn decode(self) -> (EndpointDirection, u8) {
        decode_endpoint_address(self.0)
    }
}

impl fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number(), self.direction())
    }
}

impl fmt::Debug for EndpointAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndpointAddress(0x{:02x}: {})", self.0, self)
    }
}

impl From<u8> for EndpointAddress {
    fn from(value: u8) -> Self {
        EndpointAddress(value)
    }
}

impl From<EndpointAddress> for u8 {
    fn from(value: EndpointAddress) -> u8 {
        value.0
    }
}

/// The `bmAttributes` byte of an endpoint descriptor.
#[binrw]
#[brw(little)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct EndpointAttributes(pub u8);

impl EndpointAttributes {
    pub fn new(
        transfer_type: TransferType,
        sync_type: IsoSyncType,
        usage_type: IsoUsageType,
    ) -> Self {
        EndpointAttributes(encode_endpoint_attributes(transfer_type, sync_type, usage_type))
    }

    pub fn transfer_type(self) -> TransferType {
        TransferType(self.0 & TRANSFER_TYPE_MASK)
    }

    /// The synchronization type, if this is an isochronous endpoint.
    pub fn iso_sync_type(self) -> Option<IsoSyncType> {
        self.is_isochronous()
            .then(|| IsoSyncType(self.0 & ISO_SYNC_TYPE_MASK))
    }

    /// The usage type, if this is an isochronous endpoint.
    pub fn iso_usage_type(self) -> Option<IsoUsageType> {
        self.is_isochronous()
            .then(|| IsoUsageType(self.0 & ISO_USAGE_TYPE_MASK))
    }

    pub fn is_isochronous(self) -> bool {
        self.transfer_type() == TransferType::ISOCHRONOUS
    }

    /// Same as [decode_endpoint_attributes]: all three fields, regardless of transfer type.
    pub fn decode(self) -> (TransferType, IsoSyncType, IsoUsageType) {
        decode_endpoint_attributes(self.0)
    }
}

/// Writes a value's description, or its raw [Debug] form if it has none.
fn write_described<T: Describe + fmt::Debug>(f: &mut fmt::Formatter<'_>, value: T) -> fmt::Result {
    match value.describe() {
        "" => write!(f, "{:?}", value),
        description => f.write_str(description),
    }
}

impl fmt::Display for EndpointAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_described(f, self.transfer_type())?;

        if let (Some(sync), Some(usage)) = (self.iso_sync_type(), self.iso_usage_type()) {
            f.write_str(" (")?;
            write_described(f, sync)?;
            f.write_str(", ")?;
            write_described(f, usage)?;
            f.write_str(")")?;
        }

        Ok(())
    }
}

impl fmt::Debug for EndpointAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndpointAttributes(0x{:02x}: {})", self.0, self)
    }
}

impl From<u8> for EndpointAttributes {
    fn from(value: u8) -> Self {
        EndpointAttributes(value)
    }
}

impl From<EndpointAttributes> for u8 {
    fn from(value: EndpointAttributes) -> u8 {
        value.0
    }
}
