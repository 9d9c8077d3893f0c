//! Structural checks over an assembled declaration.
//!
//! Every check runs; violations are collected rather than returned on the
//! first failure so one pass reports everything wrong with a stack.

use crate::assembler::Stack;
use crate::error::StackError;
use crate::monitoring::Alarm;
use crate::template::{Arn, Resource, Template, Value};
use crate::wafv2::managed;
use crate::wafv2::{
    is_valid_name, AggregateKeyType, BlockAction, RuleAction, RuleGroup, Statement, WebAcl, WebAclAssociation,
    WEB_ACL_BASE_CAPACITY, WEB_ACL_MAX_CAPACITY,
};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

const RATE_LIMIT_RANGE: std::ops::RangeInclusive<u64> = 10..=2_000_000_000;
const RESPONSE_CODE_RANGE: std::ops::RangeInclusive<u16> = 200..=599;

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub violations: Vec<StackError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The warnings when there are no violations, otherwise every violation.
    pub fn into_result(self) -> Result<Vec<String>, Vec<StackError>> {
        if self.violations.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self.violations)
        }
    }

    fn violation(&mut self, error: StackError) {
        self.violations.push(error);
    }

    fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }
}

pub fn validate_stack(stack: &Stack) -> ValidationReport {
    validate_template(&stack.template, &stack.load_balancer.arn)
}

/// Check `template` as a stack protecting the load balancer `load_balancer_arn`.
pub fn validate_template(template: &Template, load_balancer_arn: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_ids(template, &mut report);
    check_references(template, &mut report);

    for (_, resource) in template.resources() {
        match resource {
            Resource::IpSet(set) => {
                check_name(&set.name, &mut report);
                if let Err(e) = set.networks() {
                    report.violation(e);
                }
            }
            Resource::RegexPatternSet(set) => {
                check_name(&set.name, &mut report);
                // Also enforces the per-set pattern quota.
                if let Err(e) = set.compile() {
                    report.violation(e);
                }
            }
            Resource::RuleGroup(group) => check_rule_group(group, &mut report),
            Resource::WebAcl(acl) => check_web_acl(acl, template, &mut report),
            Resource::WebAclAssociation(association) => {
                check_association(association, template, load_balancer_arn, &mut report)
            }
            Resource::Alarm(alarm) => check_alarm(alarm, template, &mut report),
            Resource::Topic(_) | Resource::Subscription(_) => {}
        }
    }

    check_metric_names(template, &mut report);

    debug!(
        "Validated {} resources: {} violations, {} warnings",
        template.len(),
        report.violations.len(),
        report.warnings.len()
    );
    report
}

fn check_ids(template: &Template, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for (id, _) in template.resources() {
        if !seen.insert(id.as_str()) {
            report.violation(StackError::DuplicateLogicalId(id.to_string()));
        }
    }
}

fn check_references(template: &Template, report: &mut ValidationReport) {
    for (index, (id, resource)) in template.resources().enumerate() {
        let references = match resource.references() {
            Ok(references) => references,
            Err(e) => {
                report.violation(StackError::Serialization {
                    id: id.to_string(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        for reference in references {
            let Some(position) = template.position_of(&reference.target) else {
                report.violation(StackError::DanglingReference {
                    from: id.to_string(),
                    to: reference.target,
                });
                continue;
            };
            if position >= index {
                report.violation(StackError::ForwardReference {
                    from: id.to_string(),
                    to: reference.target.clone(),
                });
            }
            if let (Some(attribute), Some(target)) =
                (reference.attribute, template.get_by_name(&reference.target))
            {
                if !target.attributes().contains(&attribute.as_str()) {
                    report.violation(StackError::UnknownAttribute {
                        from: id.to_string(),
                        to: reference.target,
                        resource_type: target.type_name().to_string(),
                        attribute,
                    });
                }
            }
        }
    }

    for (id, output) in template.outputs() {
        if let Some(target) = output.value.target() {
            if template.get(target).is_none() {
                report.violation(StackError::DanglingReference {
                    from: id.to_string(),
                    to: target.to_string(),
                });
            }
        }
    }
}

fn check_name(name: &str, report: &mut ValidationReport) {
    if !is_valid_name(name) {
        report.violation(StackError::InvalidName(name.to_string()));
    }
}

fn check_priorities(collection: String, priorities: impl IntoIterator<Item = u32>, report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for priority in priorities {
        if !seen.insert(priority) && reported.insert(priority) {
            report.violation(StackError::DuplicatePriority {
                collection: collection.clone(),
                priority,
            });
        }
    }
}

fn check_rule_group(group: &RuleGroup, report: &mut ValidationReport) {
    check_name(&group.name, report);
    check_priorities(
        format!("rule group '{}'", group.name),
        group.rules.iter().map(|r| r.priority),
        report,
    );

    for rule in &group.rules {
        let context = format!("rule group '{}' rule '{}'", group.name, rule.name);
        check_name(&rule.name, report);
        check_statement(&rule.statement, &context, report);

        if let RuleAction::Block(BlockAction {
            custom_response: Some(response),
        }) = &rule.action
        {
            if !RESPONSE_CODE_RANGE.contains(&response.response_code) {
                report.violation(StackError::InvalidResponseCode {
                    context: context.clone(),
                    code: response.response_code,
                });
            }
            if let Some(ref key) = response.custom_response_body_key {
                if !group.custom_response_bodies.contains_key(key) {
                    report.violation(StackError::UnknownResponseBody {
                        context: context.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
    }

    let required = group.required_capacity();
    if required > group.capacity {
        report.violation(StackError::RuleGroupCapacity {
            group: group.name.clone(),
            declared: group.capacity,
            required,
        });
    }
}

fn check_statement(statement: &Statement, context: &str, report: &mut ValidationReport) {
    for nested in statement.flatten() {
        match nested {
            Statement::Or(list) | Statement::And(list) if list.statements.len() < 2 => {
                report.violation(StackError::TooFewStatements {
                    context: context.to_string(),
                    kind: nested.kind(),
                });
            }
            Statement::RateBased(rate) => {
                if !RATE_LIMIT_RANGE.contains(&rate.limit) {
                    report.violation(StackError::RateLimitOutOfRange {
                        context: context.to_string(),
                        limit: rate.limit,
                    });
                }
                let header_set = rate
                    .forwarded_ip_config
                    .as_ref()
                    .is_some_and(|forwarded| !forwarded.header_name.trim().is_empty());
                if rate.aggregate_key_type == AggregateKeyType::ForwardedIp && !header_set {
                    report.violation(StackError::MissingForwardedIpConfig {
                        context: context.to_string(),
                    });
                }
            }
            Statement::RegexPatternSetReference(regex) => check_priorities(
                format!("{} text transformations", context),
                regex.text_transformations.iter().map(|t| t.priority),
                report,
            ),
            _ => {}
        }
    }
}

fn check_web_acl(acl: &WebAcl, template: &Template, report: &mut ValidationReport) {
    check_name(&acl.name, report);
    check_priorities(
        format!("web ACL '{}'", acl.name),
        acl.rules.iter().map(|r| r.priority),
        report,
    );

    // u64 so no number of u32 group capacities can wrap past the ceiling.
    let mut required = 0u64;
    for rule in &acl.rules {
        check_name(&rule.name, report);
        match &rule.statement {
            Statement::RuleGroupReference(reference) => {
                match reference.arn.target().and_then(|id| template.get(id)) {
                    Some(Resource::RuleGroup(group)) => required += u64::from(group.capacity),
                    _ => report.warn(format!(
                        "Web ACL rule '{}' references {}, which is not a rule group declared here; web ACL total excludes it",
                        rule.name, reference.arn
                    )),
                }
            }
            Statement::ManagedRuleGroup(group) => match managed::lookup(&group.vendor_name, &group.name) {
                Some(known) => required += u64::from(known.capacity),
                None => report.warn(format!(
                    "Managed rule group {}/{} has unknown capacity; web ACL total excludes it",
                    group.vendor_name, group.name
                )),
            },
            _ => report.violation(StackError::UnsupportedAclStatement {
                rule: rule.name.clone(),
            }),
        }
    }

    if required > u64::from(WEB_ACL_MAX_CAPACITY) {
        report.violation(StackError::WebAclCapacity {
            acl: acl.name.clone(),
            required,
            limit: WEB_ACL_MAX_CAPACITY,
        });
    } else if required > u64::from(WEB_ACL_BASE_CAPACITY) {
        report.warn(format!(
            "Web ACL '{}' uses {} WCU, above the {} WCU included in the base price",
            acl.name, required, WEB_ACL_BASE_CAPACITY
        ));
    }
}

fn check_association(
    association: &WebAclAssociation,
    template: &Template,
    load_balancer_arn: &str,
    report: &mut ValidationReport,
) {
    let label = "WebACLAssociation".to_string();

    match association.resource_arn.as_literal() {
        Some(arn) if arn == load_balancer_arn => {}
        _ => report.violation(StackError::AssociationMismatch {
            association: label.clone(),
            reason: format!(
                "resource {} is not the load balancer {}",
                association.resource_arn, load_balancer_arn
            ),
        }),
    }

    let points_at_acl = match &association.web_acl_arn {
        Value::GetAtt(id, attribute) if attribute == "Arn" => {
            matches!(template.get(id), Some(Resource::WebAcl(_)))
        }
        _ => false,
    };
    if !points_at_acl {
        report.violation(StackError::AssociationMismatch {
            association: label,
            reason: format!("{} is not the ARN of a declared web ACL", association.web_acl_arn),
        });
    }
}

fn check_alarm(alarm: &Alarm, template: &Template, report: &mut ValidationReport) {
    if alarm.alarm_actions.is_empty() {
        report.violation(StackError::EmptyAlarmActions {
            alarm: alarm.alarm_name.clone(),
        });
    }

    for action in &alarm.alarm_actions {
        let valid = match action {
            Value::Ref(id) => matches!(template.get(id), Some(Resource::Topic(_))),
            Value::Literal(arn) => Arn::parse_sns_topic(arn).is_ok(),
            Value::GetAtt(..) => false,
        };
        if !valid {
            report.violation(StackError::InvalidAlarmAction {
                alarm: alarm.alarm_name.clone(),
                action: action.to_string(),
            });
        }
    }
}

fn check_metric_names(template: &Template, report: &mut ValidationReport) {
    let mut owners: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, resource) in template.resources() {
        match resource {
            Resource::RuleGroup(group) => {
                *owners.entry(group.visibility_config.metric_name.as_str()).or_default() += 1;
                for rule in &group.rules {
                    *owners.entry(rule.visibility_config.metric_name.as_str()).or_default() += 1;
                }
            }
            Resource::WebAcl(acl) => {
                *owners.entry(acl.visibility_config.metric_name.as_str()).or_default() += 1;
                for rule in &acl.rules {
                    *owners.entry(rule.visibility_config.metric_name.as_str()).or_default() += 1;
                }
            }
            _ => {}
        }
    }

    for (metric, count) in owners {
        if count > 1 {
            report.warn(format!("Metric name '{}' is shared by {} visibility configs", metric, count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::StackAssembler;
    use crate::config::Config;
    use crate::lookup::{Inventory, LoadBalancer};
    use crate::monitoring::{Subscription, Topic};
    use crate::template::LogicalId;
    use crate::wafv2::{
        web_acl_association, ContentType, DefaultAction, Empty, FieldToMatch, IpAddressVersion, IpSet,
        RateBasedStatement, RegexPatternSet, Rule, Scope, StatementList, TextTransformation, TextTransformationType,
        WebAclRule,
    };

    const LB: &str = "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/shop/50dc6c495c0c9188";

    fn id(s: &str) -> LogicalId {
        LogicalId::new(s).unwrap()
    }

    fn has(report: &ValidationReport, predicate: impl Fn(&StackError) -> bool) -> bool {
        report.violations.iter().any(predicate)
    }

    #[test]
    fn test_assembled_stack_is_clean() {
        let config = Config::for_environment(Some("dev"));
        let inventory = Inventory::new(vec![LoadBalancer::new(LB).with_tag("application", "")]);
        let stack = StackAssembler::new(&config, &inventory).assemble().unwrap();
        let report = validate_stack(&stack);
        assert!(report.is_valid(), "{:?}", report.violations);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn test_reference_violations() {
        let mut template = Template::new("refs");
        template
            .add(id("Early"), Subscription::email(Value::ref_to(&id("Topic")), "a@example.com"))
            .unwrap();
        let topic = template.add(id("Topic"), Topic::new("Alerts", "alerts")).unwrap();
        template
            .add(id("Lost"), Subscription::email(Value::ref_to(&id("Gone")), "a@example.com"))
            .unwrap();
        template
            .add(id("Wrong"), Subscription::email(Value::arn_of(&topic), "a@example.com"))
            .unwrap();
        template.push_unchecked(id("Topic"), Topic::new("Again", "again"));

        let report = validate_template(&template, LB);
        assert!(has(&report, |e| *e == StackError::DuplicateLogicalId("Topic".to_string())));
        assert!(has(&report, |e| matches!(e, StackError::ForwardReference { from, .. } if from == "Early")));
        assert!(has(&report, |e| matches!(e, StackError::DanglingReference { to, .. } if to == "Gone")));
        assert!(has(&report, |e| matches!(
            e,
            StackError::UnknownAttribute { attribute, resource_type, .. }
                if attribute == "Arn" && resource_type == "AWS::SNS::Topic"
        )));
    }

    #[test]
    fn test_rule_group_violations() {
        let ip = Statement::ip_set(Value::literal("arn:aws:wafv2:us-east-1:1:regional/ipset/x/1"));
        let group = RuleGroup::new("limits", 1, Scope::Regional, "limits")
            .with_response_body("known", "<p>no</p>", ContentType::TextHtml)
            .with_rule(Rule::new(
                "single-or",
                0,
                Statement::Or(StatementList { statements: vec![ip.clone()] }),
                RuleAction::block_with(700, "known"),
            ))
            .with_rule(Rule::new("slow", 0, Statement::rate_by_ip(5), RuleAction::block_with(403, "missing")));

        let mut template = Template::new("groups");
        template.add(id("Limits"), group).unwrap();
        let report = validate_template(&template, LB);

        assert!(has(&report, |e| matches!(e, StackError::DuplicatePriority { priority: 0, .. })));
        assert!(has(&report, |e| matches!(e, StackError::TooFewStatements { kind: "Or", .. })));
        assert!(has(&report, |e| matches!(e, StackError::RateLimitOutOfRange { limit: 5, .. })));
        assert!(has(&report, |e| matches!(e, StackError::InvalidResponseCode { code: 700, .. })));
        assert!(has(&report, |e| matches!(e, StackError::UnknownResponseBody { key, .. } if key == "missing")));
        assert!(has(&report, |e| matches!(
            e,
            StackError::RuleGroupCapacity { declared: 1, required: 3, .. }
        )));
    }

    #[test]
    fn test_web_acl_violations() {
        let mut template = Template::new("acl");
        let group = template
            .add(id("Big"), RuleGroup::new("big", 4400, Scope::Regional, "big"))
            .unwrap();
        let acl = WebAcl::new("acl", DefaultAction::Allow(Empty {}), Scope::Regional, "acl")
            .with_rule(WebAclRule::new("big", 0, Statement::rule_group(Value::arn_of(&group)), "big-ref"))
            .with_rule(WebAclRule::new(
                "common",
                1,
                Statement::managed(managed::AWS_VENDOR, managed::COMMON_RULE_SET, &[]),
                "common",
            ))
            .with_rule(WebAclRule::new(
                "bots",
                2,
                Statement::managed(managed::AWS_VENDOR, "AWSManagedRulesBotControlRuleSet", &[]),
                "bots",
            ))
            .with_rule(WebAclRule::new("direct", 3, Statement::ip_set(Value::literal("x")), "direct"));
        template.add(id("Acl"), acl).unwrap();

        let report = validate_template(&template, LB);
        assert!(has(&report, |e| matches!(e, StackError::WebAclCapacity { required: 5100, .. })));
        assert!(has(&report, |e| matches!(e, StackError::UnsupportedAclStatement { rule } if rule == "direct")));
        assert!(report.warnings.iter().any(|w| w.contains("BotControl")));
    }

    #[test]
    fn test_capacity_warning_tier() {
        let mut template = Template::new("acl");
        let group = template
            .add(id("Mid"), RuleGroup::new("mid", 1000, Scope::Regional, "mid"))
            .unwrap();
        let acl = WebAcl::new("acl", DefaultAction::Allow(Empty {}), Scope::Regional, "acl")
            .with_rule(WebAclRule::new("mid", 0, Statement::rule_group(Value::arn_of(&group)), "mid-ref"))
            .with_rule(WebAclRule::new(
                "common",
                1,
                Statement::managed(managed::AWS_VENDOR, managed::COMMON_RULE_SET, &[]),
                "common",
            ));
        template.add(id("Acl"), acl).unwrap();

        let report = validate_template(&template, LB);
        assert!(report.is_valid(), "{:?}", report.violations);
        assert!(report.warnings.iter().any(|w| w.contains("1700 WCU")));
    }

    #[test]
    fn test_huge_group_capacities_do_not_wrap() {
        let mut template = Template::new("acl");
        let first = template
            .add(id("First"), RuleGroup::new("first", u32::MAX - 10, Scope::Regional, "first"))
            .unwrap();
        let second = template
            .add(id("Second"), RuleGroup::new("second", u32::MAX - 10, Scope::Regional, "second"))
            .unwrap();
        let acl = WebAcl::new("acl", DefaultAction::Allow(Empty {}), Scope::Regional, "acl")
            .with_rule(WebAclRule::new("first", 0, Statement::rule_group(Value::arn_of(&first)), "first-ref"))
            .with_rule(WebAclRule::new("second", 1, Statement::rule_group(Value::arn_of(&second)), "second-ref"));
        template.add(id("Acl"), acl).unwrap();

        let report = validate_template(&template, LB);
        let expected = 2 * (u64::from(u32::MAX) - 10);
        assert!(has(&report, |e| matches!(
            e,
            StackError::WebAclCapacity { required, limit: 5000, .. } if *required == expected
        )));
    }

    #[test]
    fn test_unresolved_group_reference_warns() {
        let mut template = Template::new("acl");
        let topic = template.add(id("Topic"), Topic::new("Alerts", "alerts")).unwrap();
        let acl = WebAcl::new("acl", DefaultAction::Allow(Empty {}), Scope::Regional, "acl")
            .with_rule(WebAclRule::new("imported", 0, Statement::rule_group(Value::literal("arn:aws:wafv2:x")), "imported"))
            .with_rule(WebAclRule::new("topic", 1, Statement::rule_group(Value::ref_to(&topic)), "topic"));
        template.add(id("Acl"), acl).unwrap();

        let report = validate_template(&template, LB);
        let unresolved: Vec<&String> = report
            .warnings
            .iter()
            .filter(|w| w.contains("not a rule group declared here"))
            .collect();
        assert_eq!(unresolved.len(), 2, "{:?}", report.warnings);
        assert!(unresolved[0].contains("'imported'"));
        assert!(unresolved[1].contains("'topic'"));
    }

    #[test]
    fn test_duplicate_transformation_priority() {
        let mut statement = Statement::regex_set(Value::literal("arn:aws:wafv2:x"), FieldToMatch::UriPath(Empty {}));
        if let Statement::RegexPatternSetReference(ref mut regex) = statement {
            regex.text_transformations.push(TextTransformation {
                priority: 0,
                kind: TextTransformationType::Lowercase,
            });
        }
        let group = RuleGroup::new("paths", 100, Scope::Regional, "paths").with_rule(Rule::new(
            "paths",
            0,
            statement,
            RuleAction::Block(BlockAction::default()),
        ));
        let mut template = Template::new("groups");
        template.add(id("Paths"), group).unwrap();

        let report = validate_template(&template, LB);
        assert!(has(&report, |e| matches!(
            e,
            StackError::DuplicatePriority { collection, priority: 0 } if collection.ends_with("text transformations")
        )));
    }

    #[test]
    fn test_forwarded_ip_needs_header() {
        let headerless = Statement::RateBased(RateBasedStatement {
            aggregate_key_type: AggregateKeyType::ForwardedIp,
            forwarded_ip_config: None,
            limit: 2000,
            scope_down_statement: None,
        });
        let group = RuleGroup::new("limits", 10, Scope::Regional, "limits")
            .with_rule(Rule::new("headerless", 0, headerless, RuleAction::Block(BlockAction::default())))
            .with_rule(Rule::new(
                "blank",
                1,
                Statement::rate_by_forwarded_ip(2000, " ", crate::wafv2::FallbackBehavior::Match),
                RuleAction::Block(BlockAction::default()),
            ))
            .with_rule(Rule::new(
                "proxied",
                2,
                Statement::rate_by_forwarded_ip(2000, "X-Forwarded-For", crate::wafv2::FallbackBehavior::NoMatch),
                RuleAction::Block(BlockAction::default()),
            ));
        let mut template = Template::new("groups");
        template.add(id("Limits"), group).unwrap();

        let report = validate_template(&template, LB);
        let missing: Vec<&StackError> = report
            .violations
            .iter()
            .filter(|e| matches!(e, StackError::MissingForwardedIpConfig { .. }))
            .collect();
        assert_eq!(missing.len(), 2, "{:?}", report.violations);
    }

    #[test]
    fn test_association_and_alarm_violations() {
        let mut template = Template::new("wiring");
        let topic = template.add(id("Topic"), Topic::new("Alerts", "alerts")).unwrap();
        template
            .add(
                id("Association"),
                web_acl_association(
                    "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/other/1",
                    Value::ref_to(&topic),
                ),
            )
            .unwrap();
        template
            .add(id("Silent"), Alarm::waf_sum("silent", "BlockedRequests", 1.0, 60))
            .unwrap();
        template
            .add(
                id("Misrouted"),
                Alarm::waf_sum("misrouted", "BlockedRequests", 1.0, 60)
                    .with_action(Value::literal("arn:aws:sqs:us-east-1:1:queue"))
                    .with_action(Value::literal("arn:aws:sns:us-east-1:123456789012:ops")),
            )
            .unwrap();

        let report = validate_template(&template, LB);
        let mismatches = report
            .violations
            .iter()
            .filter(|e| matches!(e, StackError::AssociationMismatch { .. }))
            .count();
        assert_eq!(mismatches, 2);
        assert!(has(&report, |e| matches!(e, StackError::EmptyAlarmActions { alarm } if alarm == "silent")));
        let invalid_actions: Vec<&StackError> = report
            .violations
            .iter()
            .filter(|e| matches!(e, StackError::InvalidAlarmAction { .. }))
            .collect();
        assert_eq!(invalid_actions.len(), 1);
    }

    #[test]
    fn test_set_violations() {
        let mut template = Template::new("sets");
        template
            .add(
                id("V6"),
                IpSet::new("blocked v6", IpAddressVersion::Ipv6, Scope::Regional)
                    .with_addresses(vec!["192.0.2.0/24".to_string()]),
            )
            .unwrap();
        let patterns = (0..11).map(|i| format!("^p{}$", i)).collect();
        template
            .add(id("Many"), RegexPatternSet::new("many", patterns, Scope::Regional))
            .unwrap();

        let report = validate_template(&template, LB);
        assert!(has(&report, |e| matches!(e, StackError::InvalidName(name) if name == "blocked v6")));
        assert!(has(&report, |e| matches!(e, StackError::InvalidAddress { family: "IPv6", .. })));
        assert!(has(&report, |e| matches!(e, StackError::TooManyPatterns { count: 11, limit: 10, .. })));
    }

    #[test]
    fn test_shared_metric_names_warn() {
        let mut template = Template::new("metrics");
        template
            .add(id("A"), RuleGroup::new("a", 10, Scope::Regional, "shared"))
            .unwrap();
        template
            .add(id("B"), RuleGroup::new("b", 10, Scope::Regional, "shared"))
            .unwrap();
        let report = validate_template(&template, LB);
        assert!(report.is_valid());
        assert!(report.warnings.iter().any(|w| w.contains("'shared'")));
    }

    #[test]
    fn test_into_result() {
        let report = ValidationReport {
            violations: vec![StackError::Cycle("A".to_string())],
            warnings: vec!["w".to_string()],
        };
        assert_eq!(report.into_result().unwrap_err().len(), 1);
        assert_eq!(ValidationReport::default().into_result().unwrap(), Vec::<String>::new());
    }
}
