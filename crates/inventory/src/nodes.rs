use serde::{Deserialize, Serialize};

/// Health of a single storage node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    Healthy,
    Degraded,
    Offline,
}

impl NodeStatus {
    /// Uppercase badge text, e.g. `"HEALTHY"`.
    #[must_use]
    pub fn badge(&self) -> &'static str {
        match self {
            NodeStatus::Healthy  => "HEALTHY",
            NodeStatus::Degraded => "DEGRADED",
            NodeStatus::Offline  => "OFFLINE",
        }
    }
}

/// One storage node in the monitored fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageNode {
    /// Short identifier, e.g. `"SAN-01"`.
    pub id: String,
    pub name: String,
    pub status: NodeStatus,
    /// Raw capacity in TB.
    pub capacity_tb: f64,
    /// Consumed capacity in TB.
    pub used_tb: f64,
    /// Enclosure temperature in °C.
    pub temp_c: f64,
    pub raid_status: String,
    pub firmware: String,
    pub total_disks: u32,
    pub online_disks: u32,
}

impl StorageNode {
    /// Capacity usage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn capacity_fraction(&self) -> f64 {
        if self.capacity_tb == 0.0 {
            return 0.0;
        }
        self.used_tb / self.capacity_tb
    }

    /// `true` when at least one disk is offline.
    #[must_use]
    pub fn has_degraded_disks(&self) -> bool {
        self.online_disks < self.total_disks
    }
}

/// The monitored fleet. Static inventory — there is no discovery layer.
#[must_use]
pub fn fleet() -> Vec<StorageNode> {
    vec![
        StorageNode {
            id:           "SAN-01".to_string(),
            name:         "Primary SAN Cluster".to_string(),
            status:       NodeStatus::Healthy,
            capacity_tb:  500.0,
            used_tb:      342.0,
            temp_c:       42.0,
            raid_status:  "RAID 10 (Optimal)".to_string(),
            firmware:     "v4.2.1".to_string(),
            total_disks:  24,
            online_disks: 24,
        },
        StorageNode {
            id:           "NAS-01".to_string(),
            name:         "Archive NAS".to_string(),
            status:       NodeStatus::Healthy,
            capacity_tb:  1_200.0,
            used_tb:      890.0,
            temp_c:       38.0,
            raid_status:  "RAID 6 (Optimal)".to_string(),
            firmware:     "v4.1.9".to_string(),
            total_disks:  12,
            online_disks: 12,
        },
        StorageNode {
            id:           "OBJ-01".to_string(),
            name:         "S3 Object Gateway".to_string(),
            status:       NodeStatus::Degraded,
            capacity_tb:  2_000.0,
            used_tb:      1_100.0,
            temp_c:       55.0,
            raid_status:  "Erasure Coding (Rebuilding)".to_string(),
            firmware:     "v4.2.0".to_string(),
            total_disks:  36,
            online_disks: 35,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_data_is_well_formed() {
        let nodes = fleet();
        assert_eq!(nodes.len(), 3);

        for node in &nodes {
            assert!(node.used_tb <= node.capacity_tb, "{} overfull", node.id);
            assert!(node.online_disks <= node.total_disks, "{} disk counts", node.id);
            let frac = node.capacity_fraction();
            assert!((0.0..=1.0).contains(&frac));
        }
    }

    #[test]
    fn degraded_gateway_reports_offline_disk() {
        let nodes = fleet();
        let obj = &nodes[2];
        assert_eq!(obj.status, NodeStatus::Degraded);
        assert!(obj.has_degraded_disks());
    }
}
