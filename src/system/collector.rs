use sysinfo::{Components, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

use super::snapshot::{NetworkData, ProcessEntry, Snapshot};

/// Host-side sampler backing the agent's snapshot endpoint.
pub struct Collector {
    sys: System,
    networks: Networks,
    components: Components,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
        Collector {
            sys,
            networks: Networks::new_with_refreshed_list(),
            components: Components::new_with_refreshed_list(),
        }
    }

    pub fn refresh(&mut self) -> Snapshot {
        let _span = tracing::debug_span!("collector.refresh").entered();

        self.sys.refresh_memory();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing(),
        );
        self.networks.refresh(true);
        self.components.refresh(true);
        self.build_snapshot()
    }

    fn build_snapshot(&self) -> Snapshot {
        let mut networks: Vec<NetworkData> = self
            .networks
            .list()
            .iter()
            .map(|(name, data)| NetworkData {
                interface_name: name.to_string(),
                total_received: data.total_received(),
                total_transmitted: data.total_transmitted(),
            })
            .collect();
        networks.sort_by(|a, b| a.interface_name.cmp(&b.interface_name));

        let components = self
            .components
            .list()
            .iter()
            .map(|component| component_label(component.label(), component.temperature()))
            .collect();

        let mut processes: Vec<ProcessEntry> = self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessEntry {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
            })
            .collect();
        processes.sort_unstable_by_key(|p| p.pid);

        tracing::debug!(
            networks = networks.len(),
            processes = processes.len(),
            "built snapshot"
        );

        Snapshot {
            total_memory: Some(self.sys.total_memory()),
            used_memory: Some(self.sys.used_memory()),
            networks: Some(networks),
            components: Some(components),
            processes: Some(processes),
        }
    }
}

fn component_label(label: &str, temperature: Option<f32>) -> String {
    match temperature {
        Some(t) if t.is_finite() => format!("{label}: {t:.1}°C"),
        _ => label.to_string(),
    }
}
