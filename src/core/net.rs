// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). Plain http:// only.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpUrl {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl HttpUrl {
    pub fn parse(url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let rest = url
            .trim()
            .strip_prefix("http://")
            .ok_or_else(|| format!("Only http:// URLs are supported: {url}"))?;

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        if authority.is_empty() {
            return Err(format!("Missing host in URL: {url}").into());
        }
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => (h, p.parse::<u16>()?),
            None => (authority, 80),
        };
        Ok(Self { host: s!(host), port, path: s!(path) })
    }
}

pub fn is_http_url(s: &str) -> bool {
    s.trim_start().starts_with("http://")
}

pub fn http_get(url: &HttpUrl) -> Result<String, Box<dyn std::error::Error>> {
    let timeout = Some(Duration::from_secs(HTTP_TIMEOUT_SECS));
    let mut s = TcpStream::connect((url.host.as_str(), url.port))?;
    s.set_read_timeout(timeout)?;
    s.set_write_timeout(timeout)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nConnection: close\r\n\r\n",
        url.path, url.host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    split_response(&String::from_utf8_lossy(&buf))
        .map_err(|e| format!("{} ({}{})", e, url.host, url.path).into())
}

/// Status check + body extraction.
fn split_response(resp: &str) -> Result<String, String> {
    let status = resp.split("\r\n").next().unwrap_or("");
    let code = status.split_whitespace().nth(1).unwrap_or("");
    if code != "200" {
        return Err(format!("HTTP error: {}", status));
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("Malformed HTTP response")? + 4;
    Ok(resp[body_idx..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_url_variants() {
        let u = HttpUrl::parse("http://example.org/Assets/r.csv").unwrap();
        assert_eq!((u.host.as_str(), u.port, u.path.as_str()), ("example.org", 80, "/Assets/r.csv"));

        let u = HttpUrl::parse("http://localhost:8080").unwrap();
        assert_eq!((u.host.as_str(), u.port, u.path.as_str()), ("localhost", 8080, "/"));

        assert!(HttpUrl::parse("https://example.org/").is_err());
        assert!(HttpUrl::parse("http:///x").is_err());
    }

    #[test]
    fn response_status_and_body() {
        let ok = "HTTP/1.0 200 OK\r\nContent-Type: text/csv\r\n\r\na,b\n";
        assert_eq!(split_response(ok).unwrap(), "a,b\n");
        assert!(split_response("HTTP/1.1 404 Not Found\r\n\r\n").is_err());
        assert!(split_response("HTTP/1.0 200 OK\r\nno-body").is_err());
    }
}
