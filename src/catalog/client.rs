//! Blocking HTTP client for the Open Library search and cover endpoints

use super::error::{CatalogError, Result};
use super::traits::CatalogSource;
use super::types::{BookRecord, SearchRequest, SearchResponse};
use reqwest::blocking::Client;
use std::time::Duration;

/// Catalog source backed by the Open Library HTTP API
#[derive(Debug, Clone)]
pub struct OpenLibraryClient {
    search_url: String,
    client: Client,
}

impl OpenLibraryClient {
    /// Create a client for the given search endpoint
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Transport` if the underlying HTTP client cannot
    /// be constructed (e.g. TLS backend initialisation fails).
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bookverse/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            search_url: search_url.into(),
            client,
        })
    }
}

impl CatalogSource for OpenLibraryClient {
    fn search(&self, request: &SearchRequest) -> Result<Vec<BookRecord>> {
        // reqwest escapes the query value
        let response = self
            .client
            .get(&self.search_url)
            .query(&[(request.field.as_param(), request.query.as_str())])
            .query(&[("limit", request.limit)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text()?;
        Ok(SearchResponse::from_json(&body)?.into_records())
    }

    fn probe_cover(&self, url: &str) -> Result<()> {
        let response = self.client.head(url).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(CatalogError::Status(status.as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SearchField;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer a single HTTP request with a canned response and hand back the
    /// request line that was received.
    fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        (base, handle)
    }

    fn client_for(base: &str) -> OpenLibraryClient {
        OpenLibraryClient::new(format!("{base}/search.json"), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_search_sends_escaped_query_and_limit() {
        let body = r#"{"numFound":1,"docs":[{"title":"Harry Potter & Co","cover_i":7}]}"#;
        let (base, server) = serve_once("200 OK", "application/json", body);

        let request = SearchRequest::new(SearchField::Title, "  Harry Potter & Co  ");
        let records = client_for(&base).search(&request).unwrap();

        assert_eq!(
            server.join().unwrap(),
            "GET /search.json?title=Harry+Potter+%26+Co&limit=20 HTTP/1.1"
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("Harry Potter & Co"));
        assert_eq!(records[0].cover_i, Some(7));
    }

    #[test]
    fn test_search_uses_field_parameter() {
        let (base, server) = serve_once("200 OK", "application/json", r#"{"docs":[]}"#);

        let request = SearchRequest::new(SearchField::Isbn, "9780261103573");
        let records = client_for(&base).search(&request).unwrap();

        assert_eq!(
            server.join().unwrap(),
            "GET /search.json?isbn=9780261103573&limit=20 HTTP/1.1"
        );
        assert!(records.is_empty());
    }

    #[test]
    fn test_server_error_is_status_error() {
        let (base, server) = serve_once("500 Internal Server Error", "text/plain", "boom");

        let request = SearchRequest::new(SearchField::Author, "tolkien");
        let err = client_for(&base).search(&request).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, CatalogError::Status(500)));
    }

    #[test]
    fn test_html_body_is_parse_error() {
        let (base, server) = serve_once(
            "200 OK",
            "text/html",
            "<html><body>Service Unavailable</body></html>",
        );

        let request = SearchRequest::new(SearchField::Subject, "fantasy");
        let err = client_for(&base).search(&request).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_cover_reports_status() {
        let (base, server) = serve_once("404 Not Found", "text/plain", "");

        let client = client_for(&base);
        let err = client.probe_cover(&format!("{base}/b/id/1-L.jpg")).unwrap_err();

        assert_eq!(server.join().unwrap(), "HEAD /b/id/1-L.jpg HTTP/1.1");
        assert!(matches!(err, CatalogError::Status(404)));
    }

    #[test]
    fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to speak HTTP
        let client =
            OpenLibraryClient::new("http://127.0.0.1:9/search.json", Duration::from_millis(500))
                .unwrap();
        let request = SearchRequest::new(SearchField::Title, "dune");
        let err = client.search(&request).unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
