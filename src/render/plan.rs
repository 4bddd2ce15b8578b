use crate::format::format_bytes;
use crate::system::snapshot::{NetworkData, ProcessEntry, Snapshot};

use super::RegionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    SetText { region: RegionId, text: String },
    ReplaceList { region: RegionId, items: Vec<String> },
}

/// Everything one cycle writes to the page, in region order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub instructions: Vec<Instruction>,
}

impl RenderPlan {
    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn text(&self, region: RegionId) -> Option<&str> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::SetText { region: r, text } if *r == region => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn items(&self, region: RegionId) -> Option<&[String]> {
        self.instructions.iter().find_map(|i| match i {
            Instruction::ReplaceList { region: r, items } if *r == region => Some(items.as_slice()),
            _ => None,
        })
    }
}

/// Builds the full set of region updates for a snapshot.
///
/// Every region is always present in the plan: absent sequences become
/// empty lists so the previous cycle's items never linger.
pub fn plan(snapshot: &Snapshot) -> RenderPlan {
    let instructions = vec![
        Instruction::SetText {
            region: RegionId::TotalMemory,
            text: memory_text(snapshot.total_memory),
        },
        Instruction::SetText {
            region: RegionId::UsedMemory,
            text: memory_text(snapshot.used_memory),
        },
        Instruction::ReplaceList {
            region: RegionId::NetworkList,
            items: list_items(snapshot.networks.as_deref(), network_line),
        },
        Instruction::ReplaceList {
            region: RegionId::ComponentsList,
            items: list_items(snapshot.components.as_deref(), String::clone),
        },
        Instruction::ReplaceList {
            region: RegionId::ProcessList,
            items: list_items(snapshot.processes.as_deref(), process_line),
        },
    ];
    RenderPlan { instructions }
}

fn memory_text(bytes: Option<u64>) -> String {
    bytes.map(format_bytes).unwrap_or_default()
}

fn list_items<T>(source: Option<&[T]>, line: impl Fn(&T) -> String) -> Vec<String> {
    source.unwrap_or_default().iter().map(line).collect()
}

pub fn network_line(network: &NetworkData) -> String {
    format!(
        "{}: {} \u{2193} / {} \u{2191}",
        network.interface_name,
        format_bytes(network.total_received),
        format_bytes(network.total_transmitted)
    )
}

pub fn process_line(process: &ProcessEntry) -> String {
    format!("PID {}: {}", process.pid, process.name)
}
