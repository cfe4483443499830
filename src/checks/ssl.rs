//! TLS certificate expiry probe
//!
//! Opens a TLS connection to the domain, reads the leaf certificate the
//! server presents and reports its `notAfter` date. The handshake accepts any
//! certificate: this reads expiry, it does not judge trust.

use crate::checks::certificate::{self, Validity};
use crate::config::SslSettings;
use crate::utils::{dates, SslError};
use chrono::NaiveDate;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::ring;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tracing::debug;

/// A certificate verifier that accepts any certificate.
#[derive(Debug)]
struct AcceptAnyCertVerifier {
    schemes: Vec<SignatureScheme>,
}

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.schemes.clone()
    }
}

fn build_connector() -> Result<TlsConnector, SslError> {
    let provider = Arc::new(ring::default_provider());
    let verifier = AcceptAnyCertVerifier {
        schemes: provider
            .signature_verification_algorithms
            .supported_schemes(),
    };

    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| SslError::ConfigurationError {
            message: e.to_string(),
        })?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(verifier))
        .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}

/// TLS certificate expiry checker
pub struct SslChecker {
    settings: SslSettings,
}

impl SslChecker {
    /// Create a new SSL checker with the given settings
    pub fn new(settings: SslSettings) -> Self {
        Self { settings }
    }

    /// UTC calendar date on which the domain's leaf certificate expires
    pub async fn expiry(&self, domain: &str) -> Result<NaiveDate, SslError> {
        let validity = self.leaf_validity(domain).await?;
        Ok(dates::to_calendar_date(validity.not_after))
    }

    /// Validity window of the leaf certificate presented for `domain`.
    ///
    /// A single timeout covers connect, handshake and close. The socket is
    /// owned by the inner future, so it is closed whichever way that ends.
    pub async fn leaf_validity(&self, domain: &str) -> Result<Validity, SslError> {
        let der = tokio::time::timeout(
            self.settings.connect_timeout(),
            self.fetch_leaf_certificate(domain),
        )
        .await
        .map_err(|_| SslError::Timeout {
            seconds: self.settings.connect_timeout_secs,
        })??;

        Ok(certificate::parse_validity(&der)?)
    }

    async fn fetch_leaf_certificate(&self, domain: &str) -> Result<Vec<u8>, SslError> {
        let port = self.settings.port;
        let server_name =
            ServerName::try_from(domain.to_string()).map_err(|_| SslError::InvalidServerName {
                domain: domain.to_string(),
            })?;
        let connector = build_connector()?;

        debug!("Connecting to {}:{}", domain, port);
        let stream =
            TcpStream::connect((domain, port))
                .await
                .map_err(|e| SslError::ConnectionFailed {
                    host: domain.to_string(),
                    port,
                    message: e.to_string(),
                })?;

        let mut tls_stream = connector
            .connect(server_name, stream)
            .await
            .map_err(|e| SslError::HandshakeFailed {
                message: e.to_string(),
            })?;

        let leaf = {
            let (_, connection) = tls_stream.get_ref();
            connection
                .peer_certificates()
                .and_then(|certs| certs.first())
                .map(|cert| cert.as_ref().to_vec())
        };

        // close_notify is best effort; dropping the stream closes the socket regardless
        let _ = tls_stream.shutdown().await;

        leaf.ok_or(SslError::NoCertificate)
    }
}

impl Default for SslChecker {
    fn default() -> Self {
        Self::new(SslSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    fn local_settings(port: u16, timeout_secs: u64) -> SslSettings {
        SslSettings {
            port,
            connect_timeout_secs: timeout_secs,
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let checker = SslChecker::new(local_settings(port, 2));
        let err = checker.expiry("127.0.0.1").await.unwrap_err();
        assert!(matches!(err, SslError::ConnectionFailed { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_plain_tcp_server_fails_handshake() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let _ = socket
                    .write_all(b"HTTP/1.1 400 Bad Request\r\nConnection: close\r\n\r\n")
                    .await;
            }
        });

        let checker = SslChecker::new(local_settings(port, 2));
        let err = checker.expiry("127.0.0.1").await.unwrap_err();
        assert!(matches!(err, SslError::HandshakeFailed { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let accepted = listener.accept().await;
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            drop(accepted);
        });

        let checker = SslChecker::new(local_settings(port, 1));
        let err = checker.expiry("127.0.0.1").await.unwrap_err();
        assert!(matches!(err, SslError::Timeout { seconds: 1 }), "{err:?}");
        server.abort();
    }

    #[tokio::test]
    async fn test_invalid_server_name() {
        let checker = SslChecker::default();
        let err = checker.expiry("not a host name").await.unwrap_err();
        assert!(matches!(err, SslError::InvalidServerName { .. }), "{err:?}");
    }
}
