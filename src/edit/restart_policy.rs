// ABOUTME: Container restart policy as surfaced on the edit form.
// ABOUTME: Allow-listed Docker policy names; anything else coerces to None.

use std::fmt;

/// Restart policy selector on the edit form.
///
/// `None` renders as an empty policy name and means "no policy set". Unlike
/// a config-file parser this never rejects input: the inspect response is
/// server-produced data, so unknown names coerce to `None` instead of
/// failing the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestartPolicy {
    #[default]
    None,
    No,
    Always,
    OnFailure,
    UnlessStopped,
}

impl RestartPolicy {
    /// Map an inspect response's `HostConfig.RestartPolicy.Name` through the
    /// allow-list. Absent, empty, or unrecognized names become `None`.
    pub fn from_docker(name: Option<&str>) -> Self {
        match name {
            Some("no") => RestartPolicy::No,
            Some("always") => RestartPolicy::Always,
            Some("on-failure") => RestartPolicy::OnFailure,
            Some("unless-stopped") => RestartPolicy::UnlessStopped,
            _ => RestartPolicy::None,
        }
    }

    /// The policy name as it appears in a create request. `None` is the
    /// empty string.
    pub fn docker_name(&self) -> &'static str {
        match self {
            RestartPolicy::None => "",
            RestartPolicy::No => "no",
            RestartPolicy::Always => "always",
            RestartPolicy::OnFailure => "on-failure",
            RestartPolicy::UnlessStopped => "unless-stopped",
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestartPolicy::None => write!(f, "none"),
            other => write!(f, "{}", other.docker_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_listed_names_round_trip() {
        for name in ["no", "always", "on-failure", "unless-stopped"] {
            assert_eq!(RestartPolicy::from_docker(Some(name)).docker_name(), name);
        }
    }

    #[test]
    fn unknown_and_absent_names_coerce_to_none() {
        assert_eq!(RestartPolicy::from_docker(Some("bogus")), RestartPolicy::None);
        assert_eq!(RestartPolicy::from_docker(Some("")), RestartPolicy::None);
        assert_eq!(RestartPolicy::from_docker(None), RestartPolicy::None);
        assert_eq!(RestartPolicy::None.docker_name(), "");
    }
}
