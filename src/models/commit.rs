use serde::{Deserialize, Serialize};

/// One entry of the ordered commit sequence. Position 0 is the oldest commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub position: usize,
    pub hash: String,
    pub author: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
}

impl Commit {
    pub fn new(position: usize, hash: impl Into<String>, author: impl Into<String>, timestamp: i64) -> Self {
        Self {
            position,
            hash: hash.into(),
            author: author.into(),
            timestamp,
        }
    }

    /// Convert to API response format
    pub fn to_commit_info(&self) -> CommitInfo {
        CommitInfo {
            position: self.position,
            hash: self.hash.clone(),
            author: self.author.clone(),
            timestamp: self.timestamp,
            relative_time: format_relative_time(self.timestamp),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub position: usize,
    pub hash: String,
    pub author: String,
    pub timestamp: i64,
    pub relative_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitListResponse {
    pub commits: Vec<CommitInfo>,
    pub total: usize,
}

pub fn format_relative_time(timestamp: i64) -> String {
    let diff = chrono::Utc::now().timestamp() - timestamp;

    let (value, unit) = if diff < 60 {
        return "just now".to_string();
    } else if diff < 3600 {
        (diff / 60, "minute")
    } else if diff < 86400 {
        (diff / 3600, "hour")
    } else if diff < 2592000 {
        (diff / 86400, "day")
    } else if diff < 31536000 {
        (diff / 2592000, "month")
    } else {
        (diff / 31536000, "year")
    };

    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_pluralizes() {
        let now = chrono::Utc::now().timestamp();
        assert_eq!(format_relative_time(now), "just now");
        assert_eq!(format_relative_time(now - 3600), "1 hour ago");
        assert_eq!(format_relative_time(now - 3 * 86400), "3 days ago");
    }
}
