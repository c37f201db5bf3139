//! Mapping from `hickory_proto::rr::RecordType` to `relay_dns_domain::RecordType`.

use hickory_proto::rr::RecordType as HickoryRecordType;
use relay_dns_domain::RecordType;

/// Maps query types onto the locally answerable record types
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Returns `None` for types that can never be answered locally.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::PTR => Some(RecordType::PTR),
            HickoryRecordType::NS => Some(RecordType::NS),
            _ => None,
        }
    }
}
