use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub const SHEET_CSV: &str = "slug,title,description,category,material,purpose,notes,featured,images,imageAlts\n\
desk-hook,Desk Hook,Holds a bag,Functional,PETG,personal,\"4 walls, 20% infill\",TRUE,https://drive.google.com/file/d/HOOK_1/view?usp=sharing|https://cdn.example.com/hook.jpg,Hook front|Hook side\n\
broken,row\n\
tee,Golf Tee,Short tee,Sports,PLA,gift,,false,https://cdn.example.com/tee.jpg,\n";

/// Serves `/sheet.csv`, `/empty.csv` and `/error`; everything else is 404.
pub struct SheetServer {
    pub base_url: String,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SheetServer {
    pub fn spawn() -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start sheet server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let (status, body) = match request.url() {
                    "/sheet.csv" => (200, SHEET_CSV),
                    "/empty.csv" => (200, "slug,title,description,category,material\n"),
                    "/error" => (500, "internal error"),
                    _ => (404, "not found"),
                };

                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/csv"[..])
                        .expect("build header");
                let _ = request.respond(
                    tiny_http::Response::from_string(body)
                        .with_status_code(status)
                        .with_header(header),
                );
            }
        });

        Self {
            base_url,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for SheetServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// A local URL with nothing listening on it.
#[allow(dead_code)]
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe port addr");
    drop(listener);
    format!("http://{addr}/sheet.csv")
}
