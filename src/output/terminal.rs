//! Plain-text summary of a [`SubnetPlan`].

use crate::models::SubnetPlan;

const LABEL_WIDTH: usize = 22;

/// Format a `label: value` line with the value starting at column `width`.
///
/// Labels too long for the column are followed by a single space.
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    if label.len() >= width {
        format!("{label} {}", value.to_string())
    } else {
        format!("{label:<width$}{}", value.to_string())
    }
}

/// One aligned line per field of the plan.
pub fn plan_summary(plan: &SubnetPlan) -> String {
    [
        format_field("class", plan.class, LABEL_WIDTH),
        format_field("network bits", plan.network_bits, LABEL_WIDTH),
        format_field("subnet bits", plan.subnet_bits, LABEL_WIDTH),
        format_field("host bits", plan.host_bits, LABEL_WIDTH),
        format_field("subnets available", plan.subnets_available, LABEL_WIDTH),
        format_field("usable hosts/subnet", plan.usable_hosts, LABEL_WIDTH),
        format_field("subnet mask (binary)", &plan.subnet_mask_binary, LABEL_WIDTH),
        format_field("subnet mask", &plan.subnet_mask_decimal, LABEL_WIDTH),
        format_field("short", &plan.subnet_mask_short, LABEL_WIDTH),
    ]
    .join("\n")
}
