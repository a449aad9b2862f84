//! Convenience functions for turning protocol values into diagnostic text.

use crate::descriptor::EndpointDescriptor;

/// How many bytes [format_bytes_with_elision] shows from each end of a long buffer.
const ELISION_EDGE: usize = 8;

/// Formats a byte buffer as hex for log messages, eliding the middle of long buffers.
///
/// Buffers longer than 16 bytes show their first and last 8 bytes and the count in between.
pub fn format_bytes_with_elision(bytes: &[u8]) -> String {
    let hex = |chunk: &[u8]| {
        chunk
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ")
    };

    if bytes.len() <= ELISION_EDGE * 2 {
        return format!("[{}]", hex(bytes));
    }

    let elided = bytes.len() - ELISION_EDGE * 2;
    format!(
        "[{} ... ({} bytes) ... {}]",
        hex(&bytes[..ELISION_EDGE]),
        elided,
        hex(&bytes[bytes.len() - ELISION_EDGE..]),
    )
}

/// One-line summary of an endpoint descriptor, e.g.
/// `1 IN isochronous (asynchronous, data), max packet 192, interval 1`.
pub fn describe_endpoint(desc: &EndpointDescriptor) -> String {
    format!(
        "{} {}, max packet {}, interval {}",
        desc.bEndpointAddress, desc.bmAttributes, desc.wMaxPacketSize, desc.bInterval,
    )
}
