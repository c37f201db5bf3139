use super::reply::{encode, reply_to};
use hickory_proto::op::{Message, Query, ResponseCode};
use hickory_proto::rr::{rdata, Name, RData, Record};
use relay_dns_domain::{DomainError, RecordEntry, RecordType};

/// Encodes a NOERROR response carrying `entry` as its single answer, owned
/// by the question name as the client sent it.
pub fn build_response(
    request: &Message,
    question: &Query,
    entry: &RecordEntry,
) -> Result<Vec<u8>, DomainError> {
    let rdata = build_rdata(entry)?;

    let mut response = reply_to(request, ResponseCode::NoError);
    let answer = Record::from_rdata(question.name().clone(), entry.ttl, rdata);
    response.add_answer(answer);

    encode(&response)
}

pub fn build_rdata(entry: &RecordEntry) -> Result<RData, DomainError> {
    let rdata = match entry.record_type {
        RecordType::A => RData::A(rdata::A(
            entry
                .ipv4()
                .ok_or_else(|| invalid_value(entry, "not an IPv4 address"))?,
        )),
        RecordType::AAAA => RData::AAAA(rdata::AAAA(
            entry
                .ipv6()
                .ok_or_else(|| invalid_value(entry, "not an IPv6 address"))?,
        )),
        RecordType::CNAME => RData::CNAME(rdata::CNAME(target_name(entry)?)),
        RecordType::NS => RData::NS(rdata::NS(target_name(entry)?)),
        RecordType::PTR => RData::PTR(rdata::PTR(target_name(entry)?)),
        RecordType::MX => {
            let mx = entry
                .mx()
                .ok_or_else(|| invalid_value(entry, "empty MX value"))?;
            let exchange = mx
                .exchange_fqdn()
                .ok_or_else(|| invalid_value(entry, "empty MX target"))?;
            RData::MX(rdata::MX::new(mx.preference, parse_name(entry, &exchange)?))
        }
        RecordType::TXT => RData::TXT(rdata::TXT::new(entry.txt_segments())),
    };

    Ok(rdata)
}

fn target_name(entry: &RecordEntry) -> Result<Name, DomainError> {
    let target = entry
        .target_fqdn()
        .ok_or_else(|| invalid_value(entry, "empty target"))?;
    parse_name(entry, &target)
}

fn parse_name(entry: &RecordEntry, name: &str) -> Result<Name, DomainError> {
    Name::from_utf8(name).map_err(|e| invalid_value(entry, &e.to_string()))
}

fn invalid_value(entry: &RecordEntry, reason: &str) -> DomainError {
    DomainError::InvalidRecord(format!(
        "{} {} value '{}': {}",
        entry.domain_pattern, entry.record_type, entry.value, reason
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(record_type: RecordType, value: &str) -> RecordEntry {
        RecordEntry::new("test.local", record_type, value, 60)
    }

    #[test]
    fn test_a_rdata() {
        let rdata = build_rdata(&entry(RecordType::A, "10.0.0.5")).unwrap();
        assert_eq!(rdata, RData::A(rdata::A::new(10, 0, 0, 5)));
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        assert!(build_rdata(&entry(RecordType::A, "999.0.0.1")).is_err());
        assert!(build_rdata(&entry(RecordType::AAAA, "10.0.0.1")).is_err());
    }

    #[test]
    fn test_cname_target_is_fully_qualified() {
        let rdata = build_rdata(&entry(RecordType::CNAME, "target.example.com")).unwrap();
        match rdata {
            RData::CNAME(cname) => {
                assert!(cname.0.is_fqdn());
                assert_eq!(cname.0.to_ascii(), "target.example.com.");
            }
            other => panic!("unexpected rdata {:?}", other),
        }
    }

    #[test]
    fn test_mx_rdata() {
        let rdata = build_rdata(&entry(RecordType::MX, "20 mail.example.com")).unwrap();
        match rdata {
            RData::MX(mx) => {
                assert_eq!(mx.preference(), 20);
                assert_eq!(mx.exchange().to_ascii(), "mail.example.com.");
            }
            other => panic!("unexpected rdata {:?}", other),
        }
    }

    #[test]
    fn test_empty_targets_are_rejected() {
        assert!(build_rdata(&entry(RecordType::NS, "")).is_err());
        assert!(build_rdata(&entry(RecordType::MX, "")).is_err());
    }
}
