//! BEAM detectors: Elixir's mix and Erlang's rebar3.

use crate::cleaner::ArtifactDetector;

/// Detector for Elixir mix projects.
pub struct MixDetector;

impl ArtifactDetector for MixDetector {
    fn id(&self) -> &'static str {
        "mix"
    }

    fn display_name(&self) -> &'static str {
        "Elixir/mix"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["mix.exs"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["_build", "deps"]
    }
}

/// Detector for Erlang rebar3 projects.
pub struct RebarDetector;

impl ArtifactDetector for RebarDetector {
    fn id(&self) -> &'static str {
        "rebar"
    }

    fn display_name(&self) -> &'static str {
        "Erlang/rebar3"
    }

    fn markers(&self) -> &'static [&'static str] {
        &["rebar.config"]
    }

    fn artifact_dirs(&self) -> &'static [&'static str] {
        &["_build", "deps"]
    }
}
