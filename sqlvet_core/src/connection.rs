//! DASHBASE_CONN option parsing.
//!
//! Format: `;`-separated `key=value` pairs.
//!
//! ```text
//! api=http://dashbase-api:9876;kafka=k1:9092,k2:9092;topic=logs
//! ```
//!
//! `api` and `kafka` are required, `topic` is optional.

/// Parsed DASHBASE_CONN option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashbaseConnection {
    pub api_url: String,
    pub kafka_hosts: Vec<String>,
    pub topic: Option<String>,
}

pub trait ConnectionParser: Send + Sync {
    /// `None` when the string is not a valid connection option.
    fn parse(&self, conn: &str) -> Option<DashbaseConnection>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DashbaseConnectionParser;

impl ConnectionParser for DashbaseConnectionParser {
    fn parse(&self, conn: &str) -> Option<DashbaseConnection> {
        parse_connection_option(conn)
    }
}

pub fn parse_connection_option(conn: &str) -> Option<DashbaseConnection> {
    let mut api_url: Option<String> = None;
    let mut kafka_hosts: Option<Vec<String>> = None;
    let mut topic: Option<String> = None;

    for part in conn.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=')?;
        let value = value.trim();
        match key.trim().to_lowercase().as_str() {
            "api" => {
                if api_url.is_some() || !is_valid_api_url(value) {
                    return None;
                }
                api_url = Some(value.to_string());
            }
            "kafka" => {
                if kafka_hosts.is_some() {
                    return None;
                }
                kafka_hosts = Some(parse_hosts(value)?);
            }
            "topic" => {
                if topic.is_some() || value.is_empty() {
                    return None;
                }
                topic = Some(value.to_string());
            }
            _ => return None,
        }
    }

    Some(DashbaseConnection {
        api_url: api_url?,
        kafka_hosts: kafka_hosts?,
        topic,
    })
}

fn is_valid_api_url(url: &str) -> bool {
    let rest = match url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let authority = rest.split('/').next().unwrap_or_default();
    match authority.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => !authority.is_empty(),
    }
}

fn parse_hosts(value: &str) -> Option<Vec<String>> {
    let mut hosts = Vec::new();
    for host in value.split(',').map(str::trim) {
        let (name, port) = host.rsplit_once(':')?;
        if name.is_empty() || port.parse::<u16>().is_err() {
            return None;
        }
        hosts.push(host.to_string());
    }
    if hosts.is_empty() {
        return None;
    }
    Some(hosts)
}
