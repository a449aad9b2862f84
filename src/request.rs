//! The `bmRequestType` byte of a control transfer's setup packet [USB 2.0§9.3].
//!
//! ```text
//!   7    6 5    4 3 2 1 0
//! [dir][type][ recipient ]
//! ```
//!
//! The direction bit uses the same encoding as an endpoint address, so it is an
//! [EndpointDirection] here too: [EndpointDirection::IN] is device-to-host.

use std::fmt;

use binrw::binrw;
use log::debug;

use crate::{
    endpoint::{EndpointDirection, ENDPOINT_DIRECTION_MASK},
    macros::usb_value,
    Error, UsbResult,
};

/// Isolates the direction bit of `bmRequestType`.
pub const REQUEST_DIRECTION_MASK: u8 = ENDPOINT_DIRECTION_MASK;
/// Isolates the (pre-shifted) request type of `bmRequestType`.
pub const REQUEST_TYPE_MASK: u8 = 0x60;
/// Isolates the recipient of `bmRequestType`.
pub const RECIPIENT_MASK: u8 = 0x1f;

usb_value! {
    /// Whose semantics a control request follows, stored already shifted into bits 5..=6.
    ///
    /// This is only one field of `bmRequestType`; see [BmRequestType] for the whole byte.
    pub struct RequestType;

    STANDARD = 0 << 5 => "standard",
    CLASS = 1 << 5 => "class",
    VENDOR = 2 << 5 => "vendor",
    RESERVED = 3 << 5 => "reserved",
}

usb_value! {
    /// What a control request is addressed to, in bits 0..=4. Values 4 to 31 are reserved.
    pub struct Recipient;

    DEVICE = 0 => "device",
    INTERFACE = 1 => "interface",
    ENDPOINT = 2 => "endpoint",
    OTHER = 3 => "other",
}

/// Packs a direction, request type and recipient into a `bmRequestType` byte.
///
/// Recipients are five bits wide; anything above 0x1f is rejected with
/// [Error::InvalidArgument] rather than truncated.
pub fn encode_request_type(
    direction: EndpointDirection,
    request_type: RequestType,
    recipient: Recipient,
) -> UsbResult<u8> {
    if recipient.0 & !RECIPIENT_MASK != 0 {
        let err = Error::InvalidArgument {
            field: "recipient",
            value: recipient.0,
            mask: RECIPIENT_MASK,
        };
        debug!("Refusing to encode bmRequestType: {}", err);
        return Err(err);
    }

    Ok((direction.0 & REQUEST_DIRECTION_MASK) | (request_type.0 & REQUEST_TYPE_MASK) | recipient.0)
}

/// Splits a `bmRequestType` byte into its direction, request type and recipient. Never fails.
pub fn decode_request_type(bm_request_type: u8) -> (EndpointDirection, RequestType, Recipient) {
    (
        EndpointDirection(bm_request_type & REQUEST_DIRECTION_MASK),
        RequestType(bm_request_type & REQUEST_TYPE_MASK),
        Recipient(bm_request_type & RECIPIENT_MASK),
    )
}

/// A whole `bmRequestType` byte.
#[binrw]
#[brw(little)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct BmRequestType(pub u8);

impl BmRequestType {
    pub fn new(
        direction: EndpointDirection,
        request_type: RequestType,
        recipient: Recipient,
    ) -> UsbResult<Self> {
        encode_request_type(direction, request_type, recipient).map(BmRequestType)
    }

    pub fn direction(self) -> EndpointDirection {
        EndpointDirection(self.0 & REQUEST_DIRECTION_MASK)
    }

    pub fn request_type(self) -> RequestType {
        RequestType(self.0 & REQUEST_TYPE_MASK)
    }

    pub fn recipient(self) -> Recipient {
        Recipient(self.0 & RECIPIENT_MASK)
    }
}

impl fmt::Display for BmRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} request to {}",
            self.direction(),
            self.request_type(),
            self.recipient()
        )
    }
}

impl fmt::Debug for BmRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BmRequestType(0x{:02x}: {})", self.0, self)
    }
}

impl From<u8> for BmRequestType {
    fn from(value: u8) -> Self {
        BmRequestType(value)
    }
}

impl From<BmRequestType> for u8 {
    fn from(value: BmRequestType) -> u8 {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Describe;

    #[test]
    fn request_type_codes() {
        assert_eq!(RequestType::STANDARD.bits(), 0x00);
        assert_eq!(RequestType::CLASS.bits(), 0x20);
        assert_eq!(RequestType::VENDOR.bits(), 0x40);
        assert_eq!(RequestType::RESERVED.bits(), 0x60);
        assert!(RequestType::ALL.iter().all(|t| t.0 & !REQUEST_TYPE_MASK == 0));
    }

    #[test]
    fn masks_partition_the_byte() {
        assert_eq!(REQUEST_DIRECTION_MASK & REQUEST_TYPE_MASK, 0);
        assert_eq!(REQUEST_TYPE_MASK & RECIPIENT_MASK, 0);
        assert_eq!(REQUEST_DIRECTION_MASK | REQUEST_TYPE_MASK | RECIPIENT_MASK, 0xff);
    }

    #[test]
    fn get_descriptor_request() {
        // GET_DESCRIPTOR is a standard, device-to-host request to the device.
        let byte =
            encode_request_type(EndpointDirection::IN, RequestType::STANDARD, Recipient::DEVICE);
        assert_eq!(byte, Ok(0x80));

        // A vendor OUT request to an interface.
        let byte =
            encode_request_type(EndpointDirection::OUT, RequestType::VENDOR, Recipient::INTERFACE)
                .unwrap();
        assert_eq!(byte, 0x41);
        assert_eq!(
            decode_request_type(byte),
            (EndpointDirection::OUT, RequestType::VENDOR, Recipient::INTERFACE)
        );
    }

    #[test]
    fn round_trip() {
        for direction in EndpointDirection::ALL {
            for request_type in RequestType::ALL {
                for recipient in Recipient::ALL {
                    let packed =
                        BmRequestType::new(*direction, *request_type, *recipient).unwrap();
                    assert_eq!(packed.direction(), *direction);
                    assert_eq!(packed.request_type(), *request_type);
                    assert_eq!(packed.recipient(), *recipient);
                }
            }
        }
    }

    #[test]
    fn encode_checks_recipient_width() {
        assert_eq!(
            encode_request_type(EndpointDirection::IN, RequestType::STANDARD, Recipient(0x1f)),
            Ok(0x9f)
        );
        assert_eq!(
            encode_request_type(EndpointDirection::IN, RequestType::STANDARD, Recipient(0x20)),
            Err(Error::InvalidArgument {
                field: "recipient",
                value: 0x20,
                mask: RECIPIENT_MASK,
            })
        );
        // A reserved bit above the recipient field must not read back as recipient 5.
        assert!(
            BmRequestType::new(EndpointDirection::IN, RequestType::STANDARD, Recipient(0x25))
                .is_err()
        );
    }

    #[test]
    fn reserved_recipients_describe_as_empty() {
        let (_, _, recipient) = decode_request_type(0xa5);
        assert_eq!(recipient, Recipient(5));
        assert_eq!(recipient.describe(), "");
        assert_eq!(RequestType(0x01).describe(), "");
    }

    #[test]
    fn display() {
        assert_eq!(BmRequestType(0xa1).to_string(), "IN class request to interface");
        assert_eq!(
            format!("{:?}", BmRequestType(0x00)),
            "BmRequestType(0x00: OUT standard request to device)"
        );
    }
}
