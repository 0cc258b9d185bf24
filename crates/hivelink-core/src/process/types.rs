use serde::{Deserialize, Serialize};

/// Basic information about a process matched by the liveness query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_info_serde_roundtrip() {
        let info = ProcessInfo {
            pid: 4242,
            name: "sshuttle".to_string(),
        };
        let json = serde_json::to_string(&info).unwrap();
        let parsed: ProcessInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pid, 4242);
        assert_eq!(parsed.name, "sshuttle");
    }
}
