pub const AWS_VENDOR: &str = "AWS";

pub const IP_REPUTATION_LIST: &str = "AWSManagedRulesAmazonIpReputationList";
pub const ANONYMOUS_IP_LIST: &str = "AWSManagedRulesAnonymousIpList";
pub const COMMON_RULE_SET: &str = "AWSManagedRulesCommonRuleSet";

/// A vendor-supplied rule group and the capacity AWS charges for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedRuleSet {
    pub vendor: &'static str,
    pub name: &'static str,
    pub capacity: u32,
}

pub const CATALOGUE: &[ManagedRuleSet] = &[
    ManagedRuleSet { vendor: AWS_VENDOR, name: IP_REPUTATION_LIST, capacity: 25 },
    ManagedRuleSet { vendor: AWS_VENDOR, name: ANONYMOUS_IP_LIST, capacity: 50 },
    ManagedRuleSet { vendor: AWS_VENDOR, name: COMMON_RULE_SET, capacity: 700 },
    ManagedRuleSet { vendor: AWS_VENDOR, name: "AWSManagedRulesKnownBadInputsRuleSet", capacity: 200 },
    ManagedRuleSet { vendor: AWS_VENDOR, name: "AWSManagedRulesSQLiRuleSet", capacity: 200 },
    ManagedRuleSet { vendor: AWS_VENDOR, name: "AWSManagedRulesLinuxRuleSet", capacity: 200 },
];

pub fn lookup(vendor: &str, name: &str) -> Option<&'static ManagedRuleSet> {
    CATALOGUE.iter().find(|set| set.vendor == vendor && set.name == name)
}
