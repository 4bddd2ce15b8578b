use std::fmt;

use super::RegionId;

/// A render target addressed by region identifiers.
pub trait Surface {
    fn set_text(&mut self, region: RegionId, text: &str);
    fn replace_list(&mut self, region: RegionId, items: &[String]);
}

/// In-memory page holding the current contents of every region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    total_memory: String,
    used_memory: String,
    network_list: Vec<String>,
    components_list: Vec<String>,
    process_list: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, region: RegionId) -> Option<&str> {
        match region {
            RegionId::TotalMemory => Some(&self.total_memory),
            RegionId::UsedMemory => Some(&self.used_memory),
            _ => None,
        }
    }

    pub fn list(&self, region: RegionId) -> Option<&[String]> {
        match region {
            RegionId::NetworkList => Some(&self.network_list),
            RegionId::ComponentsList => Some(&self.components_list),
            RegionId::ProcessList => Some(&self.process_list),
            _ => None,
        }
    }

    fn list_mut(&mut self, region: RegionId) -> Option<&mut Vec<String>> {
        match region {
            RegionId::NetworkList => Some(&mut self.network_list),
            RegionId::ComponentsList => Some(&mut self.components_list),
            RegionId::ProcessList => Some(&mut self.process_list),
            _ => None,
        }
    }
}

impl Surface for Page {
    fn set_text(&mut self, region: RegionId, text: &str) {
        let target = match region {
            RegionId::TotalMemory => &mut self.total_memory,
            RegionId::UsedMemory => &mut self.used_memory,
            _ => {
                tracing::debug!(region = region.element_id(), "ignoring text for list region");
                return;
            }
        };
        target.clear();
        target.push_str(text);
    }

    fn replace_list(&mut self, region: RegionId, items: &[String]) {
        match self.list_mut(region) {
            Some(list) => {
                list.clear();
                list.extend_from_slice(items);
            }
            None => {
                tracing::debug!(region = region.element_id(), "ignoring items for text region")
            }
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", RegionId::TotalMemory.title(), self.total_memory)?;
        writeln!(f, "{}: {}", RegionId::UsedMemory.title(), self.used_memory)?;
        for region in RegionId::LISTS {
            let items = self.list(region).unwrap_or_default();
            writeln!(f)?;
            writeln!(f, "{} ({})", region.title(), items.len())?;
            for item in items {
                writeln!(f, "  {item}")?;
            }
        }
        Ok(())
    }
}
