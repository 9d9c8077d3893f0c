use super::Config;
use crate::template::Arn;
use super::waf::RESPONSE_BODY_GROUPS;
use crate::wafv2::{AggregateKeyType, IpAddressVersion, IpSet, RegexPatternSet, Scope, WEB_ACL_MAX_CAPACITY};
use anyhow::Result;

const ALARM_PERIODS: [u32; 3] = [10, 20, 30];

pub fn validate_config(config: &Config) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if let Some(env) = config.environment() {
        if !env.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            warnings.push(format!(
                "[X] Environment '{}' may only contain letters, digits, '-' and '_'",
                env
            ));
        }
    }

    if config.region.is_empty() {
        warnings.push("[X] Region is empty".to_string());
    } else if config.region.split('-').count() < 3 {
        warnings.push(format!(
            "[!] Region '{}' does not look like an AWS region (e.g. us-east-1)",
            config.region
        ));
    }

    if config.scope == Scope::Cloudfront {
        warnings.push(
            "[X] Scope CLOUDFRONT cannot be associated with an application load balancer; use REGIONAL".to_string(),
        );
    }

    if let Some(ref arn) = config.load_balancer.arn {
        if let Err(e) = Arn::parse_application_load_balancer(arn) {
            warnings.push(format!("[X] load_balancer.arn: {}", e));
        }
    } else {
        if config.load_balancer.tags.is_empty() {
            warnings.push("[!] Load balancer tag filter is empty. Any single load balancer will match.".to_string());
        }
        for (key, value) in &config.load_balancer.tags {
            if value.is_empty() {
                warnings.push(format!(
                    "[!] Load balancer tag '{}' has an empty value. Set it to the application to protect.",
                    key
                ));
            }
        }
        if let Some(ref inventory) = config.load_balancer.inventory {
            if !inventory.exists() {
                warnings.push(format!(
                    "[X] Load balancer inventory not found: {}",
                    inventory.display()
                ));
            }
        }
    }

    for (version, addresses) in [
        (IpAddressVersion::Ipv4, &config.ip_sets.ipv4),
        (IpAddressVersion::Ipv6, &config.ip_sets.ipv6),
    ] {
        let set = IpSet::new(version.label(), version, config.scope).with_addresses(addresses.clone());
        if let Err(e) = set.networks() {
            warnings.push(format!("[X] {}", e));
        }
    }

    for (name, patterns) in [
        ("bot_user_agents", &config.patterns.bot_user_agents),
        ("url_paths", &config.patterns.url_paths),
    ] {
        if patterns.is_empty() {
            warnings.push(format!("[X] patterns.{} is empty. A pattern set needs at least one expression.", name));
            continue;
        }
        let set = RegexPatternSet::new(name, patterns.clone(), config.scope);
        if let Err(e) = set.compile() {
            warnings.push(format!("[X] {}", e));
        }
    }

    let groups = &config.rule_groups;
    for (name, capacity) in [
        ("bad_url_capacity", groups.bad_url_capacity),
        ("block_ip_capacity", groups.block_ip_capacity),
        ("bot_request_capacity", groups.bot_request_capacity),
        ("rate_limit_capacity", groups.rate_limit_capacity),
    ] {
        if capacity == 0 {
            warnings.push(format!("[X] rule_groups.{} cannot be 0", name));
        } else if capacity > WEB_ACL_MAX_CAPACITY {
            warnings.push(format!(
                "[X] rule_groups.{} {} exceeds the web ACL limit of {} WCU",
                name, capacity, WEB_ACL_MAX_CAPACITY
            ));
        }
    }

    if !(10..=2_000_000_000).contains(&groups.rate_limit) {
        warnings.push(format!(
            "[X] Rate limit {} is outside 10..=2000000000 requests per 5 minutes",
            groups.rate_limit
        ));
    }

    if groups.rate_limit_key == AggregateKeyType::ForwardedIp && groups.forwarded_ip_header.trim().is_empty() {
        warnings.push("[X] rule_groups.forwarded_ip_header is empty but rate_limit_key is FORWARDED_IP".to_string());
    }

    if !(200..=599).contains(&groups.response_code) {
        warnings.push(format!(
            "[X] Response code {} is outside 200..=599",
            groups.response_code
        ));
    } else if groups.response_code < 400 {
        warnings.push(format!(
            "[!] Blocked requests answer with non-error status {}",
            groups.response_code
        ));
    }

    if groups.response_body.is_empty() {
        warnings.push("[X] rule_groups.response_body is empty".to_string());
    }
    for (group, body) in &groups.response_body_overrides {
        if !RESPONSE_BODY_GROUPS.contains(&group.as_str()) {
            warnings.push(format!(
                "[X] rule_groups.response_body_overrides.{} is not a rule group ({})",
                group,
                RESPONSE_BODY_GROUPS.join(", ")
            ));
        } else if body.is_empty() {
            warnings.push(format!("[X] rule_groups.response_body_overrides.{} is empty", group));
        }
    }

    let monitoring = &config.monitoring;
    if !monitoring.email.contains('@') {
        warnings.push(format!("[X] Invalid notification email: {}", monitoring.email));
    }

    if monitoring.passed_requests_threshold <= 0.0 || monitoring.blocked_requests_threshold <= 0.0 {
        warnings.push("[!] Alarm threshold <= 0. The alarm will fire on every period.".to_string());
    }

    if !(ALARM_PERIODS.contains(&monitoring.period) || (monitoring.period >= 60 && monitoring.period % 60 == 0)) {
        warnings.push(format!(
            "[X] Alarm period {}s must be 10, 20, 30 or a multiple of 60",
            monitoring.period
        ));
    }

    if let Some(ref arn) = monitoring.existing_topic_arn {
        if let Err(e) = Arn::parse_sns_topic(arn) {
            warnings.push(format!("[X] monitoring.existing_topic_arn: {}", e));
        }
    }

    if !["trace", "debug", "info", "warn", "error"].contains(&config.logging.level.as_str()) {
        warnings.push(format!(
            "[X] Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            config.logging.level
        ));
    }

    if !["json", "pretty", "text"].contains(&config.logging.format.as_str()) {
        warnings.push(format!(
            "[X] Invalid log format: {}. Must be 'json', 'pretty' or 'text'",
            config.logging.format
        ));
    }

    if config.patterns.url_paths.iter().chain(&config.patterns.bot_user_agents).any(|p| p == "^foobar$") {
        warnings.push(
            "[*] Recommendation: Replace the placeholder '^foobar$' patterns before deploying".to_string()
        );
    }

    if config.logging.level == "debug" || config.logging.level == "trace" {
        warnings.push(
            "[*] Recommendation: Use 'info' or 'warn' log level for CI runs".to_string()
        );
    }

    Ok(warnings)
}

/// True when any warning is a hard error (`[X]`).
pub fn has_errors(warnings: &[String]) -> bool {
    warnings.iter().any(|w| w.starts_with("[X]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(config: &Config) -> Vec<String> {
        validate_config(config)
            .unwrap()
            .into_iter()
            .filter(|w| w.starts_with("[X]"))
            .collect()
    }

    #[test]
    fn test_default_config_has_no_errors() {
        let warnings = validate_config(&Config::for_environment(Some("dev"))).unwrap();
        assert!(!has_errors(&warnings), "{:?}", warnings);
        assert!(warnings.iter().any(|w| w.contains("empty value")));
        assert!(warnings.iter().any(|w| w.contains("placeholder")));
    }

    #[test]
    fn test_bad_addresses_and_patterns() {
        let mut config = Config::default();
        config.ip_sets.ipv4 = vec!["2001:db8::/32".to_string()];
        config.patterns.bot_user_agents = vec!["(".to_string()];
        config.patterns.url_paths.clear();

        let errors = errors(&config);
        assert_eq!(errors.len(), 3, "{:?}", errors);
        assert!(errors.iter().any(|e| e.contains("IPv4")));
        assert!(errors.iter().any(|e| e.contains("does not compile")));
        assert!(errors.iter().any(|e| e.contains("url_paths is empty")));
    }

    #[test]
    fn test_limits_and_monitoring() {
        let mut config = Config::default();
        config.rule_groups.rate_limit = 5;
        config.rule_groups.block_ip_capacity = 0;
        config.rule_groups.response_code = 999;
        config.monitoring.email = "nobody".to_string();
        config.monitoring.period = 45;
        config.monitoring.existing_topic_arn = Some("arn:aws:sqs:us-east-1:1:q".to_string());

        let errors = errors(&config);
        assert_eq!(errors.len(), 6, "{:?}", errors);
    }

    #[test]
    fn test_capacity_above_web_acl_limit() {
        let mut config = Config::default();
        config.rule_groups.bad_url_capacity = u32::MAX;
        config.rule_groups.rate_limit_capacity = 5000;

        let errors = errors(&config);
        assert_eq!(errors.len(), 1, "{:?}", errors);
        assert!(errors[0].contains("bad_url_capacity 4294967295 exceeds"));
    }

    #[test]
    fn test_forwarded_ip_header_required() {
        let mut config = Config::default();
        config.rule_groups.rate_limit_key = AggregateKeyType::ForwardedIp;
        assert!(errors(&config).is_empty());

        config.rule_groups.forwarded_ip_header = "  ".to_string();
        assert!(errors(&config).iter().any(|e| e.contains("forwarded_ip_header")));
    }

    #[test]
    fn test_response_body_overrides_checked() {
        let mut config = Config::default();
        let overrides = &mut config.rule_groups.response_body_overrides;
        overrides.insert("rate_limit".to_string(), String::new());
        overrides.insert("admin".to_string(), "<p>no</p>".to_string());

        let errors = errors(&config);
        assert_eq!(errors.len(), 2, "{:?}", errors);
        assert!(errors[0].contains("overrides.admin is not a rule group"));
        assert!(errors[1].contains("overrides.rate_limit is empty"));
    }

    #[test]
    fn test_alarm_periods() {
        let mut config = Config::default();
        for period in [10, 30, 60, 300] {
            config.monitoring.period = period;
            assert!(!has_errors(&validate_config(&config).unwrap()), "period {}", period);
        }
    }

    #[test]
    fn test_cloudfront_scope_rejected() {
        let mut config = Config::default();
        config.scope = Scope::Cloudfront;
        assert!(errors(&config).iter().any(|e| e.contains("CLOUDFRONT")));
    }

    #[test]
    fn test_pinned_arn_checked() {
        let mut config = Config::default();
        config.load_balancer.arn = Some("arn:aws:sns:us-east-1:1:topic".to_string());
        assert!(errors(&config).iter().any(|e| e.contains("load_balancer.arn")));
    }

    #[test]
    fn test_environment_characters() {
        let config = Config::for_environment(Some("dev env"));
        assert!(errors(&config).iter().any(|e| e.contains("Environment")));
    }
}
