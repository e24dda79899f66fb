use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

use tinws::conn::{Connection, State};
use tinws::error::ConnectError;

use log::debug;

const HOST: &str = "127.0.0.1";
const PATH: &str = "/ws";

const RESPONSE: &[u8] = b"HTTP/1.1 101 Switching Protocols\r\n\
    Upgrade: websocket\r\n\
    Connection: Upgrade\r\n\
    Sec-WebSocket-Accept: s3pPLMBiTxaQ9kYGzzhZRbK+xOo=\r\n\r\n";

fn read_request(tcp: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = tcp.read(&mut chunk).unwrap();
        assert!(n > 0, "client closed before finishing the request");
        request.extend_from_slice(&chunk[..n]);
    }
    request
}

#[test]
fn sync_handshake() {
    let _ = env_logger::builder().is_test(true).try_init();

    let lis = TcpListener::bind((HOST, 0)).unwrap();
    let port = lis.local_addr().unwrap().port();

    let t = thread::spawn(move || {
        let (mut tcp, _) = lis.accept().unwrap();
        debug!("server: tcp accepted!");

        let request = read_request(&mut tcp);
        let request = String::from_utf8(request).unwrap();
        assert!(request.starts_with("GET /ws HTTP/1.1\r\n"));
        assert!(request.contains("Host: 127.0.0.1\r\n"));
        assert!(request.contains("Upgrade: websocket\r\n"));
        assert!(request.contains("Connection: Upgrade\r\n"));
        assert!(request.contains("Sec-WebSocket-Key: "));
        assert!(request.contains("Sec-WebSocket-Version: 13\r\n"));

        tcp.write_all(RESPONSE).unwrap();
        debug!("server: websocket accepted!");
    });

    let conn = Connection::open(HOST, port, PATH).unwrap();
    debug!("client: websocket connected!");
    assert_eq!(conn.state(), State::Open);

    t.join().unwrap();
}

#[test]
fn sync_handshake_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();

    let lis = TcpListener::bind((HOST, 0)).unwrap();
    let port = lis.local_addr().unwrap().port();

    let t = thread::spawn(move || {
        let (mut tcp, _) = lis.accept().unwrap();
        let _ = read_request(&mut tcp);
        tcp.write_all(b"HTTP/1.1 400 Bad Request\r\n\r\n").unwrap();
    });

    let err = Connection::open(HOST, port, PATH).unwrap_err();
    assert!(matches!(err, ConnectError::Rejected));

    t.join().unwrap();
}

#[test]
fn sync_handshake_no_response() {
    let _ = env_logger::builder().is_test(true).try_init();

    let lis = TcpListener::bind((HOST, 0)).unwrap();
    let port = lis.local_addr().unwrap().port();

    let t = thread::spawn(move || {
        let (mut tcp, _) = lis.accept().unwrap();
        let _ = read_request(&mut tcp);
        // drop without answering
    });

    let err = Connection::open(HOST, port, PATH).unwrap_err();
    assert!(matches!(err, ConnectError::NoResponse));

    t.join().unwrap();
}
