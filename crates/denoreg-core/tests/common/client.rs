//! Blocking curl client for hitting the redirector in integration tests.
//! Redirects are not followed so 301 responses can be inspected.

use std::str;

#[derive(Debug)]
pub struct Reply {
    pub status: u32,
    pub headers: Vec<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.iter().find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub fn get(url: &str, user_agent: Option<&str>) -> Reply {
    let mut headers = Vec::new();
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).unwrap();
    if let Some(ua) = user_agent {
        easy.useragent(ua).unwrap();
    }
    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })
            .unwrap();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .unwrap();
        transfer.perform().unwrap();
    }
    let status = easy.response_code().unwrap();

    Reply {
        status,
        headers,
        body,
    }
}

/// Runs [`get`] on the blocking pool.
pub async fn get_async(url: String, user_agent: Option<&'static str>) -> Reply {
    tokio::task::spawn_blocking(move || get(&url, user_agent))
        .await
        .unwrap()
}
