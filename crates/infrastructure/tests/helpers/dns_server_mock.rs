#![allow(dead_code)]
use relay_dns_infrastructure::dns::transport::tcp::{
    read_with_length_prefix, send_with_length_prefix,
};
use std::net::SocketAddr;
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock upstream treats incoming queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Reply with a single A record 93.184.216.34.
    Answer,
    /// Send a reply with the wrong id first, then the real one.
    StaleThenAnswer,
    /// Never reply.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start_udp(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if behavior == MockBehavior::Silent {
                                continue;
                            }
                            let response = Self::build_mock_response(&buf[..len]);
                            if behavior == MockBehavior::StaleThenAnswer {
                                let mut stale = response.clone();
                                stale[0] ^= 0xff;
                                let _ = socket.send_to(&stale, peer).await;
                            }
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn start_tcp() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = listener.accept() => {
                        if let Ok((mut stream, _)) = result {
                            tokio::spawn(async move {
                                if let Ok(query) = read_with_length_prefix(&mut stream).await {
                                    let response = Self::build_mock_response(&query);
                                    let _ = send_with_length_prefix(&mut stream, &response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Echoes the question and appends one A record pointing back at it.
    pub fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]);

        response.push(0x81);
        response.push(0x80);

        response.extend_from_slice(&query[4..6]);

        response.extend_from_slice(&[0x00, 0x01]);

        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&[0x00, 0x00]);

        if query.len() > 12 {
            response.extend_from_slice(&query[12..]);
        }

        response.extend_from_slice(&[
            0xc0, 0x0c,
            0x00, 0x01,
            0x00, 0x01,
            0x00, 0x00, 0x00, 0x3c,
            0x00, 0x04,
            93, 184, 216, 34,
        ]);

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
