//! Command-line state and alias table
//!
//! The `:` prompt accepts resource family aliases (`:srv`, `:net`),
//! view commands (`:topology`, `:clouds`) and shell passthrough
//! (`:!openstack server list`). Tab cycles through matching aliases.

use stackscope_core::types::ResourceKind;

/// What a parsed command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    Kind(ResourceKind),
    Topology,
    Clouds,
    Help,
    Quit,
}

/// A submitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    Target(CommandTarget),
    /// `!cmd` runs through the shell and shows the output.
    Shell(String),
}

/// Alias -> target. First entry per target is the canonical name shown
/// in help and completion.
const ALIASES: &[(&str, CommandTarget)] = &[
    ("servers", CommandTarget::Kind(ResourceKind::Server)),
    ("srv", CommandTarget::Kind(ResourceKind::Server)),
    ("networks", CommandTarget::Kind(ResourceKind::Network)),
    ("net", CommandTarget::Kind(ResourceKind::Network)),
    ("subnets", CommandTarget::Kind(ResourceKind::Subnet)),
    ("sub", CommandTarget::Kind(ResourceKind::Subnet)),
    ("ports", CommandTarget::Kind(ResourceKind::Port)),
    ("fips", CommandTarget::Kind(ResourceKind::FloatingIp)),
    ("floating-ips", CommandTarget::Kind(ResourceKind::FloatingIp)),
    ("volumes", CommandTarget::Kind(ResourceKind::Volume)),
    ("vol", CommandTarget::Kind(ResourceKind::Volume)),
    ("routers", CommandTarget::Kind(ResourceKind::Router)),
    ("rt", CommandTarget::Kind(ResourceKind::Router)),
    ("secgroups", CommandTarget::Kind(ResourceKind::SecurityGroup)),
    ("sg", CommandTarget::Kind(ResourceKind::SecurityGroup)),
    ("loadbalancers", CommandTarget::Kind(ResourceKind::LoadBalancer)),
    ("lb", CommandTarget::Kind(ResourceKind::LoadBalancer)),
    ("images", CommandTarget::Kind(ResourceKind::Image)),
    ("img", CommandTarget::Kind(ResourceKind::Image)),
    ("flavors", CommandTarget::Kind(ResourceKind::Flavor)),
    ("keypairs", CommandTarget::Kind(ResourceKind::Keypair)),
    ("hypervisors", CommandTarget::Kind(ResourceKind::Hypervisor)),
    ("projects", CommandTarget::Kind(ResourceKind::Project)),
    ("users", CommandTarget::Kind(ResourceKind::User)),
    ("zones", CommandTarget::Kind(ResourceKind::DnsZone)),
    ("dns", CommandTarget::Kind(ResourceKind::DnsZone)),
    ("topology", CommandTarget::Topology),
    ("topo", CommandTarget::Topology),
    ("clouds", CommandTarget::Clouds),
    ("help", CommandTarget::Help),
    ("quit", CommandTarget::Quit),
    ("q", CommandTarget::Quit),
];

#[derive(Default)]
pub struct CommandState {
    pub input: String,
    /// Cursor into the current completion cycle, if any.
    completion_index: Option<usize>,
    /// Prefix the cycle was started from.
    completion_seed: String,
}

impl CommandState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.completion_index = None;
        self.completion_seed.clear();
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.completion_index = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.completion_index = None;
    }

    /// Tab: cycle through aliases matching the typed prefix.
    pub fn complete(&mut self) {
        let seed = match self.completion_index {
            Some(_) => self.completion_seed.clone(),
            None => self.input.trim().to_owned(),
        };
        let candidates: Vec<&str> = ALIASES
            .iter()
            .map(|(alias, _)| *alias)
            .filter(|alias| alias.starts_with(&seed))
            .collect();
        if candidates.is_empty() {
            return;
        }

        let next = match self.completion_index {
            Some(i) => (i + 1) % candidates.len(),
            None => 0,
        };
        self.completion_seed = seed;
        self.completion_index = Some(next);
        self.input = candidates[next].to_owned();
    }

    /// Parses the current input into an action, if it means anything.
    pub fn parse(&self) -> Option<CommandAction> {
        let input = self.input.trim();
        if input.is_empty() {
            return None;
        }
        if let Some(cmd) = input.strip_prefix('!') {
            let cmd = cmd.trim();
            if cmd.is_empty() {
                return None;
            }
            return Some(CommandAction::Shell(cmd.to_owned()));
        }
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == input)
            .map(|(_, target)| CommandAction::Target(*target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(input: &str) -> CommandState {
        let mut state = CommandState::new();
        for c in input.chars() {
            state.push(c);
        }
        state
    }

    #[test]
    fn aliases_resolve_to_their_family() {
        assert_eq!(
            typed("srv").parse(),
            Some(CommandAction::Target(CommandTarget::Kind(
                ResourceKind::Server
            )))
        );
        assert_eq!(
            typed("floating-ips").parse(),
            Some(CommandAction::Target(CommandTarget::Kind(
                ResourceKind::FloatingIp
            )))
        );
        assert_eq!(
            typed("topo").parse(),
            Some(CommandAction::Target(CommandTarget::Topology))
        );
    }

    #[test]
    fn bang_prefix_is_shell_passthrough() {
        assert_eq!(
            typed("!openstack server list").parse(),
            Some(CommandAction::Shell("openstack server list".to_owned()))
        );
        assert_eq!(typed("!").parse(), None);
    }

    #[test]
    fn unknown_input_parses_to_nothing() {
        assert_eq!(typed("frobnicate").parse(), None);
        assert_eq!(typed("  ").parse(), None);
    }

    #[test]
    fn tab_cycles_matching_aliases() {
        let mut state = typed("s");
        state.complete();
        assert_eq!(state.input, "servers");
        state.complete();
        assert_eq!(state.input, "srv");
        state.complete();
        assert_eq!(state.input, "subnets");

        // A fresh prefix starts a fresh cycle.
        let mut state = typed("sub");
        state.complete();
        assert_eq!(state.input, "subnets");
        state.complete();
        assert_eq!(state.input, "sub");
    }
}
