//! Leaf certificate parsing
//!
//! Reads the validity window of a DER-encoded X.509 certificate using
//! x509-parser. Nothing else about the certificate is inspected.

use crate::utils::CertificateError;
use chrono::{DateTime, TimeZone, Utc};
use x509_parser::prelude::*;

/// Validity window of a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

/// Parse a DER-encoded certificate and return its validity window
pub fn parse_validity(der: &[u8]) -> Result<Validity, CertificateError> {
    let (_, cert) = X509Certificate::from_der(der).map_err(|e| CertificateError::ParseError {
        message: format!("{:?}", e),
    })?;

    Ok(Validity {
        not_before: asn1_time_to_datetime(cert.validity().not_before)?,
        not_after: asn1_time_to_datetime(cert.validity().not_after)?,
    })
}

fn asn1_time_to_datetime(time: ASN1Time) -> Result<DateTime<Utc>, CertificateError> {
    Utc.timestamp_opt(time.timestamp(), 0)
        .single()
        .ok_or(CertificateError::InvalidTimestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage() {
        let err = parse_validity(&[0x30, 0x03, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, CertificateError::ParseError { .. }));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(parse_validity(&[]).is_err());
    }
}
