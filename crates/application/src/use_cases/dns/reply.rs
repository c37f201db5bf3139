use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use relay_dns_domain::DomainError;

const HEADER_LEN: usize = 12;

/// Response skeleton for `request`: same id and opcode, RD and CD copied,
/// RA set, first question echoed, no records.
pub fn reply_to(request: &Message, code: ResponseCode) -> Message {
    let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
    response.set_recursion_desired(request.recursion_desired());
    response.set_checking_disabled(request.checking_disabled());
    response.set_recursion_available(true);
    response.set_response_code(code);
    if let Some(question) = request.queries().first() {
        response.add_query(question.clone());
    }
    response
}

pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(serialize_error)?;

    Ok(buf)
}

fn serialize_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::InvalidResponse(format!("Failed to serialize response: {}", e))
}

/// Error reply for a decoded request. Falls back to a bare header when the
/// echoed question itself cannot be encoded.
pub fn failure_response(request: &Message, code: ResponseCode, wire: &[u8]) -> Vec<u8> {
    encode(&reply_to(request, code))
        .ok()
        .or_else(|| header_only(wire, code))
        .unwrap_or_default()
}

/// Header-only reply built straight from the raw query bytes, for packets
/// that could not be decoded. `None` when there is no complete header.
pub fn header_only(query: &[u8], code: ResponseCode) -> Option<Vec<u8>> {
    if query.len() < HEADER_LEN {
        return None;
    }

    let mut buf = vec![0u8; HEADER_LEN];
    buf[0] = query[0];
    buf[1] = query[1];
    // QR, opcode and RD
    buf[2] = 0x80 | (query[2] & 0x79);
    // RA, CD and rcode
    buf[3] = 0x80 | (query[3] & 0x10) | (u16::from(code) as u8 & 0x0F);
    Some(buf)
}
