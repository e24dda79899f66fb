use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;
use std::thread;

use tinws::conn::{Connection, State};
use tinws::frame::{self, Fin, FrameHead, Mask, OpCode, PayloadLen};

use log::debug;

const HOST: &str = "127.0.0.1";
const PATH: &str = "/ws";
const ECHO_DATA: &[u8] = b"ECHO ECHO ECHO!";

const RESPONSE: &[u8] = b"HTTP/1.1 101 Switching Protocols\r\n\
    Upgrade: websocket\r\n\
    Connection: Upgrade\r\n\
    Sec-WebSocket-Accept: s3pPLMBiTxaQ9kYGzzhZRbK+xOo=\r\n\r\n";

fn accept_upgrade(tcp: &mut TcpStream) {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = tcp.read(&mut chunk).unwrap();
        assert!(n > 0, "client closed before finishing the request");
        request.extend_from_slice(&chunk[..n]);
    }
    tcp.write_all(RESPONSE).unwrap();
}

// server frames travel unmasked
fn server_text_frame(payload: &[u8]) -> Vec<u8> {
    let head = FrameHead::new(
        Fin::Y,
        OpCode::Text,
        Mask::None,
        PayloadLen::from_num(payload.len() as u64),
    );
    let mut wire = Vec::new();
    head.encode_into(&mut wire);
    wire.extend_from_slice(payload);
    wire
}

fn wait_readable(conn: &mut Connection<TcpStream>) {
    for _ in 0..100 {
        if conn.is_readable(Duration::from_millis(100)) {
            return;
        }
    }
    panic!("no data within 10s");
}

#[test]
fn sync_echo() {
    let _ = env_logger::builder().is_test(true).try_init();

    let lis = TcpListener::bind((HOST, 0)).unwrap();
    let port = lis.local_addr().unwrap().port();

    let t = thread::spawn(move || {
        let (mut tcp, _) = lis.accept().unwrap();
        debug!("server: tcp accepted!");
        accept_upgrade(&mut tcp);
        debug!("server: websocket accepted!");

        let mut buf = [0u8; 4096];
        for i in 1..=5 {
            let n = tcp.read(&mut buf).unwrap();
            let payload = frame::decode(&buf[..n]);
            debug!("server: echo[{}]..", i);
            tcp.write_all(&server_text_frame(&payload)).unwrap();
        }
        debug!("server: close");
    });

    let mut conn = Connection::open(HOST, port, PATH).unwrap();
    debug!("client: websocket connected!");

    for i in 1..=5 {
        debug!("client: send[{}]..", i);
        conn.send_text(std::str::from_utf8(ECHO_DATA).unwrap()).unwrap();

        wait_readable(&mut conn);
        let payload = conn.receive_one().unwrap();
        debug!("client: receive message: {}", String::from_utf8_lossy(&payload));
        assert_eq!(payload, ECHO_DATA);
    }

    t.join().unwrap();

    // server has gone away: the next receive observes the close
    wait_readable(&mut conn);
    assert_eq!(conn.receive_one(), None);
    assert_eq!(conn.state(), State::Closed);
    assert!(!conn.is_open());

    debug!("client: close");
    conn.close();
}
