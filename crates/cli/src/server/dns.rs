use relay_dns_infrastructure::dns::transport::tcp::{
    read_with_length_prefix, send_with_length_prefix,
};
use relay_dns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

const UDP_RECV_BUFFER: usize = 4096;
const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Serves UDP and TCP on `bind_addr` until `shutdown` fires, then waits for
/// in-flight queries to finish.
pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let domain = if bind_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let udp_socket = Arc::new(create_udp_socket(domain, bind_addr)?);
    let tcp_listener = create_tcp_listener(domain, bind_addr)?;
    let tracker = TaskTracker::new();

    info!(bind_address = %bind_addr, "DNS server ready (UDP + TCP)");

    tokio::select! {
        _ = shutdown.cancelled() => {}
        _ = run_udp(udp_socket, handler.clone(), &tracker) => {}
        _ = run_tcp(tcp_listener, handler, &tracker, &shutdown) => {}
    }

    tracker.close();
    info!(
        in_flight = tracker.len(),
        "Listeners stopped, draining in-flight queries"
    );
    tracker.wait().await;

    Ok(())
}

async fn run_udp(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>, tracker: &TaskTracker) {
    let mut recv_buf = [0u8; UDP_RECV_BUFFER];

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let query = recv_buf[..len].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();
        tracker.spawn(async move {
            if let Some(response) = handler.handle_raw(&query, from.ip()).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "UDP send failed");
                }
            }
        });
    }
}

async fn run_tcp(
    listener: TcpListener,
    handler: Arc<DnsServerHandler>,
    tracker: &TaskTracker,
    shutdown: &CancellationToken,
) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "TCP accept error");
                continue;
            }
        };

        tracker.spawn(serve_tcp_connection(
            stream,
            peer,
            handler.clone(),
            shutdown.clone(),
        ));
    }
}

/// Answers length-prefixed queries on one connection until the client
/// closes it, goes idle or the server shuts down.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    handler: Arc<DnsServerHandler>,
    shutdown: CancellationToken,
) {
    loop {
        let query = tokio::select! {
            _ = shutdown.cancelled() => break,
            read = tokio::time::timeout(TCP_IDLE_TIMEOUT, read_with_length_prefix(&mut stream)) => {
                match read {
                    Ok(Ok(query)) => query,
                    Ok(Err(_)) => break,
                    Err(_) => {
                        debug!(client = %peer, "TCP connection idle, closing");
                        break;
                    }
                }
            }
        };

        let Some(response) = handler.handle_raw(&query, peer.ip()).await else {
            break;
        };

        if let Err(e) = send_with_length_prefix(&mut stream, &response).await {
            debug!(client = %peer, error = %e, "TCP send failed");
            break;
        }
    }
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
