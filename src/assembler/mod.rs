//! Builds the WAF stack declaration, leaves first.
//!
//! 1. IP sets and regex pattern sets
//! 2. Rule groups referencing them
//! 3. The web ACL referencing every rule group plus the AWS managed groups
//! 4. The association to the looked-up load balancer
//! 5. Topic, subscription and alarms
//!
//! Every reference points at a resource declared earlier in the same template.

use crate::config::{Config, DefaultVerdict};
use crate::error::StackError;
use crate::lookup::{LoadBalancer, LoadBalancerDirectory};
use crate::monitoring::{Alarm, Subscription, Topic};
use crate::template::{Arn, Export, LogicalId, Output, Template, Value};
use crate::wafv2::managed::{self, AWS_VENDOR};
use crate::wafv2::{
    web_acl_association, AggregateKeyType, DefaultAction, Empty, FieldToMatch, IpAddressVersion, IpSet, RegexPatternSet,
    Rule, RuleAction, RuleGroup, SingleHeader, Statement, WebAcl, WebAclRule,
};
use tracing::{debug, info};

/// Logical ids of the nodes the stack is built from.
#[derive(Debug, Clone)]
pub struct StackNodes {
    pub ipv4_set: LogicalId,
    pub ipv6_set: LogicalId,
    pub bot_pattern_set: LogicalId,
    pub url_pattern_set: LogicalId,
    pub bad_url_group: LogicalId,
    pub block_ip_group: LogicalId,
    pub bot_request_group: LogicalId,
    pub rate_limit_group: LogicalId,
    pub web_acl: LogicalId,
    pub association: LogicalId,
    pub topic: LogicalId,
    pub subscription: LogicalId,
    pub passed_requests_alarm: LogicalId,
    pub blocked_requests_alarm: LogicalId,
}

/// An assembled declaration and the load balancer it protects.
#[derive(Debug, Clone)]
pub struct Stack {
    pub name: String,
    pub template: Template,
    pub load_balancer: LoadBalancer,
    pub nodes: StackNodes,
}

struct PatternSets {
    ipv4: LogicalId,
    ipv6: LogicalId,
    bots: LogicalId,
    urls: LogicalId,
}

struct RuleGroups {
    bad_url: LogicalId,
    block_ip: LogicalId,
    bot_request: LogicalId,
    rate_limit: LogicalId,
    rate_limit_name: String,
}

struct Monitoring {
    topic: LogicalId,
    subscription: LogicalId,
    passed_alarm: LogicalId,
    blocked_alarm: LogicalId,
}

pub struct StackAssembler<'a, D: LoadBalancerDirectory + ?Sized> {
    config: &'a Config,
    directory: &'a D,
}

impl<'a, D: LoadBalancerDirectory + ?Sized> StackAssembler<'a, D> {
    pub fn new(config: &'a Config, directory: &'a D) -> Self {
        Self { config, directory }
    }

    pub fn assemble(&self) -> Result<Stack, StackError> {
        let config = self.config;
        let name = config.suffixed(&config.stack_name);
        info!("Assembling stack {} in {}", name, config.region);

        let load_balancer = self.directory.find_by_tags(&config.load_balancer.tags)?;
        info!("Protecting load balancer {}", load_balancer.arn);

        let mut template = Template::new(config.description.clone());

        let sets = self.declare_sets(&mut template)?;
        let groups = self.declare_rule_groups(&mut template, &sets)?;
        let (web_acl, web_acl_name) = self.declare_web_acl(&mut template, &groups)?;

        let association = template.add(
            self.id("Association")?,
            web_acl_association(load_balancer.arn.as_str(), Value::arn_of(&web_acl)),
        )?;
        debug!("Declared association {}", association);

        let monitoring = self.declare_monitoring(&mut template, &groups, &web_acl_name)?;

        let nodes = StackNodes {
            ipv4_set: sets.ipv4,
            ipv6_set: sets.ipv6,
            bot_pattern_set: sets.bots,
            url_pattern_set: sets.urls,
            bad_url_group: groups.bad_url,
            block_ip_group: groups.block_ip,
            bot_request_group: groups.bot_request,
            rate_limit_group: groups.rate_limit,
            web_acl,
            association,
            topic: monitoring.topic,
            subscription: monitoring.subscription,
            passed_requests_alarm: monitoring.passed_alarm,
            blocked_requests_alarm: monitoring.blocked_alarm,
        };

        self.declare_outputs(&mut template, &name, &load_balancer, &nodes)?;

        info!(
            "Assembled {} resources and {} outputs",
            template.len(),
            template.outputs().count()
        );

        Ok(Stack {
            name,
            template,
            load_balancer,
            nodes,
        })
    }

    fn id(&self, base: &str) -> Result<LogicalId, StackError> {
        LogicalId::compose(base, self.config.environment())
    }

    fn declare_sets(&self, template: &mut Template) -> Result<PatternSets, StackError> {
        let config = self.config;
        let on_env = config.on_environment();
        info!("Declaring IP sets and regex pattern sets");

        let mut ip_set = |base: &str, version: IpAddressVersion, addresses: &[String]| -> Result<LogicalId, StackError> {
            let label = version.label();
            let set = IpSet::new(config.suffixed(&format!("blocked-{}-ip-list", label)), version, config.scope)
                .with_addresses(addresses.to_vec())
                .with_description(format!(
                    "This IP set will be used to list permanently blocked {} IPs{}.",
                    label, on_env
                ))
                .with_tag("ipset", config.suffixed(label));
            debug!("IP set {} with {} addresses", set.name, set.addresses.len());
            template.add(self.id(base)?, set)
        };

        let ipv4 = ip_set("IPv4IPSet", IpAddressVersion::Ipv4, &config.ip_sets.ipv4)?;
        let ipv6 = ip_set("IPv6IPSet", IpAddressVersion::Ipv6, &config.ip_sets.ipv6)?;

        let bot_name = config.suffixed("bot-requests");
        let bots = template.add(
            self.id("BotRegexPatternSet")?,
            RegexPatternSet::new(bot_name.clone(), config.patterns.bot_user_agents.clone(), config.scope)
                .with_description(format!(
                    "This regex rule is for requests which have bad User Agent{}.",
                    on_env
                ))
                .with_tag("regexPattern", bot_name),
        )?;

        let url_name = config.suffixed("url-path");
        let urls = template.add(
            self.id("UrlRegexPatternSet")?,
            RegexPatternSet::new(url_name.clone(), config.patterns.url_paths.clone(), config.scope)
                .with_description(format!("This regex group is to find false url requests{}.", on_env))
                .with_tag("regexPattern", url_name),
        )?;

        Ok(PatternSets { ipv4, ipv6, bots, urls })
    }

    fn declare_rule_groups(&self, template: &mut Template, sets: &PatternSets) -> Result<RuleGroups, StackError> {
        let config = self.config;
        let settings = &config.rule_groups;
        let on_env = config.on_environment();
        info!("Declaring rule groups");

        let group = |base_name: &str, capacity: u32, metric: &str, body: (&str, &str), description: String| {
            let (body_key, settings_key) = body;
            let name = config.suffixed(base_name);
            RuleGroup::new(name.clone(), capacity, config.scope, config.suffixed(metric))
                .with_description(description)
                .with_response_body(body_key, settings.response_body_for(settings_key), settings.content_type)
                .with_tag("rule-group", name)
        };
        let block = |body_key: &str| RuleAction::block_with(settings.response_code, body_key);

        let bad_url = template.add(
            self.id("badUrlRequestRG")?,
            group(
                "bad-url-request-rg",
                settings.bad_url_capacity,
                "badUrlRequestRG",
                ("badUrlResponse", "bad_url"),
                format!("This rule group will be used for requests with bad URL{}.", on_env),
            )
            .with_rule(
                Rule::new(
                    config.suffixed("url-rule"),
                    0,
                    Statement::regex_set(Value::arn_of(&sets.urls), FieldToMatch::UriPath(Empty {})),
                    block("badUrlResponse"),
                )
                .with_label("badurlrequest"),
            ),
        )?;

        let block_ip = template.add(
            self.id("blockIpRG")?,
            group(
                "block-ip-rg",
                settings.block_ip_capacity,
                "blockIpRG",
                ("blockIpResponse", "block_ip"),
                format!("This rule group will be used to block malicious IPs{}.", on_env),
            )
            .with_rule(
                Rule::new(
                    config.suffixed("blocked-ips"),
                    0,
                    Statement::or(vec![
                        Statement::ip_set(Value::arn_of(&sets.ipv4)),
                        Statement::ip_set(Value::arn_of(&sets.ipv6)),
                    ]),
                    block("blockIpResponse"),
                )
                .with_label("permanentlyblockedip"),
            ),
        )?;

        let bot_request = template.add(
            self.id("botRequestRG")?,
            group(
                "bot-requests-rg",
                settings.bot_request_capacity,
                "botRequestRG",
                ("botRequestResponse", "bot_request"),
                format!("This rule group will be used to block bot requests{}.", on_env),
            )
            .with_rule(
                Rule::new(
                    config.suffixed("block-bot-rule"),
                    0,
                    Statement::regex_set(
                        Value::arn_of(&sets.bots),
                        FieldToMatch::SingleHeader(SingleHeader {
                            name: "User-Agent".to_string(),
                        }),
                    ),
                    block("botRequestResponse"),
                )
                .with_label("botrequests"),
            ),
        )?;

        let rate_statement = match settings.rate_limit_key {
            AggregateKeyType::Ip => Statement::rate_by_ip(settings.rate_limit),
            AggregateKeyType::ForwardedIp => Statement::rate_by_forwarded_ip(
                settings.rate_limit,
                settings.forwarded_ip_header.clone(),
                settings.forwarded_ip_fallback,
            ),
        };
        let rate_limit_name = config.suffixed("limit-ip-request-rg");
        let rate_limit = template.add(
            self.id("limitIpRequestRG")?,
            group(
                "limit-ip-request-rg",
                settings.rate_limit_capacity,
                "limitIpRequestRG",
                ("limitIpResponse", "rate_limit"),
                format!(
                    "This rule group will be used to count and block requests from IP{}.",
                    on_env
                ),
            )
            .with_rule(
                Rule::new(
                    config.suffixed("block-ip-rule"),
                    0,
                    rate_statement,
                    block("limitIpResponse"),
                )
                .with_label("limitIp"),
            ),
        )?;

        debug!(
            "Rule groups {}, {}, {}, {}",
            bad_url, block_ip, bot_request, rate_limit
        );

        Ok(RuleGroups {
            bad_url,
            block_ip,
            bot_request,
            rate_limit,
            rate_limit_name,
        })
    }

    fn declare_web_acl(&self, template: &mut Template, groups: &RuleGroups) -> Result<(LogicalId, String), StackError> {
        let config = self.config;
        let name = config.web_acl_name();
        info!("Declaring web ACL {}", name);

        let default_action = match config.web_acl.default_action {
            DefaultVerdict::Allow => DefaultAction::Allow(Empty {}),
            DefaultVerdict::Block => DefaultAction::Block(Empty {}),
        };

        let custom = |rule: &str, priority: u32, group: &LogicalId, metric: &str| {
            WebAclRule::new(
                config.suffixed(rule),
                priority,
                Statement::rule_group(Value::arn_of(group)),
                config.suffixed(metric),
            )
        };
        let aws_managed = |set: &str, priority: u32| {
            let excluded = config.web_acl.excluded_rules.get(set).cloned().unwrap_or_default();
            WebAclRule::new(
                format!("{}-{}", AWS_VENDOR, set),
                priority,
                Statement::managed(AWS_VENDOR, set, &excluded),
                set,
            )
        };

        let acl = WebAcl::new(name.clone(), default_action, config.scope, config.suffixed("webACL"))
            .with_description(config.web_acl.description.clone())
            .with_rule(custom("limit-ip", 0, &groups.rate_limit, "limit-ip"))
            .with_rule(aws_managed(managed::IP_REPUTATION_LIST, 1))
            .with_rule(custom("blocked-ip", 2, &groups.block_ip, "blocked-ip"))
            .with_rule(custom("block-bot-requests", 3, &groups.bot_request, "blocked-bot-requests"))
            .with_rule(custom("block-url-requests", 4, &groups.bad_url, "blocked-url-requests"))
            .with_rule(aws_managed(managed::ANONYMOUS_IP_LIST, 5))
            .with_rule(aws_managed(managed::COMMON_RULE_SET, 6))
            .with_tag("webAcl", config.environment().unwrap_or(&name));

        let id = template.add(self.id("webACL")?, acl)?;
        Ok((id, name))
    }

    fn declare_monitoring(
        &self,
        template: &mut Template,
        groups: &RuleGroups,
        web_acl_name: &str,
    ) -> Result<Monitoring, StackError> {
        let config = self.config;
        let settings = &config.monitoring;
        let on_env = config.on_environment();
        info!("Declaring monitoring");

        if let Some(ref existing) = settings.existing_topic_arn {
            let arn = Arn::parse_sns_topic(existing)?;
            info!("Existing SNS topic {} is left unmanaged", arn);
        }

        let topic = template.add(
            self.id("Topic")?,
            Topic::new(config.titled(&settings.topic_display_name), config.suffixed(&settings.topic_name)),
        )?;

        let subscription = template.add(
            self.id("Subscription")?,
            Subscription::email(Value::ref_to(&topic), settings.email.clone()),
        )?;
        debug!("Subscribed {} to {}", settings.email, topic);

        let passed_alarm = template.add(
            self.id("WafCountedRequestsAlarm")?,
            Alarm::waf_sum(
                config.titled("WAF Counted Requests Alarm"),
                "PassedRequests",
                settings.passed_requests_threshold,
                settings.period,
            )
            .with_description(format!(
                "Triggered when requests passed by {} reach {} within {} seconds{}",
                groups.rate_limit_name, settings.passed_requests_threshold, settings.period, on_env
            ))
            .with_dimension("RuleGroup", groups.rate_limit_name.clone())
            .with_dimension("Region", config.region.clone())
            .with_dimension("Rule", "ALL")
            .with_action(Value::ref_to(&topic)),
        )?;

        let blocked_alarm = template.add(
            self.id("WafBlockedRequestsAlarm")?,
            Alarm::waf_sum(
                config.titled("WAF Blocked Requests Alarm"),
                "BlockedRequests",
                settings.blocked_requests_threshold,
                settings.period,
            )
            .with_description(format!(
                "Triggered when requests blocked by {} reach {} within {} seconds{}",
                web_acl_name, settings.blocked_requests_threshold, settings.period, on_env
            ))
            .with_dimension("WebACL", web_acl_name)
            .with_dimension("Region", config.region.clone())
            .with_dimension("Rule", "ALL")
            .with_action(Value::ref_to(&topic)),
        )?;

        Ok(Monitoring {
            topic,
            subscription,
            passed_alarm,
            blocked_alarm,
        })
    }

    fn declare_outputs(
        &self,
        template: &mut Template,
        stack_name: &str,
        load_balancer: &LoadBalancer,
        nodes: &StackNodes,
    ) -> Result<(), StackError> {
        let outputs = [
            ("LoadBalancerArn", "Load balancer ARN", Value::literal(load_balancer.arn.clone())),
            ("BadUrlRequestRGArn", "Bad URL rule group ARN", Value::arn_of(&nodes.bad_url_group)),
            ("BlockIpRGArn", "Block IP rule group ARN", Value::arn_of(&nodes.block_ip_group)),
            ("BotRequestRGArn", "Bot request rule group ARN", Value::arn_of(&nodes.bot_request_group)),
            ("LimitIpRequestRGArn", "Limit IP requests rule group ARN", Value::arn_of(&nodes.rate_limit_group)),
            ("WafAclRegionalArn", "Web ACL ARN", Value::arn_of(&nodes.web_acl)),
            ("SnsTopicArn", "SNS topic ARN", Value::ref_to(&nodes.topic)),
        ];

        for (id, description, value) in outputs {
            let export = self.config.outputs.export.then(|| Export {
                name: format!("{}-{}", stack_name, id),
            });
            template.add_output(
                LogicalId::new(id)?,
                Output {
                    description: description.to_string(),
                    value,
                    export,
                },
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::Inventory;
    use crate::template::Resource;
    use serde_json::json;

    const LB: &str = "arn:aws:elasticloadbalancing:us-east-1:123456789012:loadbalancer/app/shop/50dc6c495c0c9188";

    fn inventory() -> Inventory {
        Inventory::new(vec![LoadBalancer::new(LB).with_tag("application", "")])
    }

    fn dev_stack() -> Stack {
        let config = Config::for_environment(Some("dev"));
        StackAssembler::new(&config, &inventory()).assemble().unwrap()
    }

    #[test]
    fn test_declaration_order_and_ids() {
        let stack = dev_stack();
        let ids: Vec<&str> = stack.template.resources().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "IPv4IPSetDev",
                "IPv6IPSetDev",
                "BotRegexPatternSetDev",
                "UrlRegexPatternSetDev",
                "badUrlRequestRGDev",
                "blockIpRGDev",
                "botRequestRGDev",
                "limitIpRequestRGDev",
                "webACLDev",
                "AssociationDev",
                "TopicDev",
                "SubscriptionDev",
                "WafCountedRequestsAlarmDev",
                "WafBlockedRequestsAlarmDev",
            ]
        );
        assert_eq!(stack.name, "waf-stack-dev");
    }

    #[test]
    fn test_dev_names() {
        let stack = dev_stack();
        let names: Vec<&str> = stack.template.resources().filter_map(|(_, r)| r.name()).collect();
        assert!(names.contains(&"blocked-IPv4-ip-list-dev"));
        assert!(names.contains(&"blocked-IPv6-ip-list-dev"));
        assert!(names.contains(&"bot-requests-dev"));
        assert!(names.contains(&"url-path-dev"));
        assert!(names.contains(&"bad-url-request-rg-dev"));
        assert!(names.contains(&"limit-ip-request-rg-dev"));
        assert!(names.contains(&"dev-acl"));
        assert!(names.contains(&"waf-monitoring-dev"));
    }

    #[test]
    fn test_production_has_no_suffix() {
        let config = Config::default();
        let stack = StackAssembler::new(&config, &inventory()).assemble().unwrap();
        assert!(stack.template.get_by_name("IPv4IPSet").is_some());
        match stack.template.get(&stack.nodes.web_acl) {
            Some(Resource::WebAcl(acl)) => {
                assert_eq!(acl.name, "waf-acl");
                assert_eq!(acl.rules[0].name, "limit-ip");
            }
            other => panic!("unexpected web ACL node: {:?}", other),
        }
    }

    #[test]
    fn test_web_acl_rule_order() {
        let stack = dev_stack();
        let acl = match stack.template.get(&stack.nodes.web_acl) {
            Some(Resource::WebAcl(acl)) => acl.clone(),
            other => panic!("unexpected web ACL node: {:?}", other),
        };
        let rules: Vec<(&str, u32)> = acl.rules.iter().map(|r| (r.name.as_str(), r.priority)).collect();
        assert_eq!(
            rules,
            vec![
                ("limit-ip-dev", 0),
                ("AWS-AWSManagedRulesAmazonIpReputationList", 1),
                ("blocked-ip-dev", 2),
                ("block-bot-requests-dev", 3),
                ("block-url-requests-dev", 4),
                ("AWS-AWSManagedRulesAnonymousIpList", 5),
                ("AWS-AWSManagedRulesCommonRuleSet", 6),
            ]
        );
        assert_eq!(
            acl.rules[0].statement,
            Statement::rule_group(Value::arn_of(&stack.nodes.rate_limit_group))
        );
    }

    #[test]
    fn test_association_wiring() {
        let stack = dev_stack();
        match stack.template.get(&stack.nodes.association) {
            Some(Resource::WebAclAssociation(a)) => {
                assert_eq!(a.resource_arn, Value::literal(LB));
                assert_eq!(a.web_acl_arn, Value::arn_of(&stack.nodes.web_acl));
            }
            other => panic!("unexpected association node: {:?}", other),
        }
        assert_eq!(stack.load_balancer.arn, LB);
    }

    #[test]
    fn test_alarm_dimensions() {
        let stack = dev_stack();
        let doc = stack.template.to_json().unwrap();
        let passed = &doc["Resources"]["WafCountedRequestsAlarmDev"]["Properties"];
        assert_eq!(passed["MetricName"], "PassedRequests");
        assert_eq!(passed["Threshold"], 10.0);
        assert_eq!(
            passed["Dimensions"],
            json!([
                {"Name": "RuleGroup", "Value": "limit-ip-request-rg-dev"},
                {"Name": "Region", "Value": "us-east-1"},
                {"Name": "Rule", "Value": "ALL"}
            ])
        );
        assert_eq!(passed["AlarmActions"], json!([{"Ref": "TopicDev"}]));

        let blocked = &doc["Resources"]["WafBlockedRequestsAlarmDev"]["Properties"];
        assert_eq!(blocked["MetricName"], "BlockedRequests");
        assert_eq!(blocked["Threshold"], 2.0);
        assert_eq!(blocked["Dimensions"][0], json!({"Name": "WebACL", "Value": "dev-acl"}));
    }

    #[test]
    fn test_outputs_and_exports() {
        let stack = dev_stack();
        let ids: Vec<&str> = stack.template.outputs().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids.len(), 7);
        assert_eq!(
            stack.template.output("LoadBalancerArn").map(|o| o.value.clone()),
            Some(Value::literal(LB))
        );
        assert!(stack.template.outputs().all(|(_, o)| o.export.is_none()));

        let mut config = Config::for_environment(Some("dev"));
        config.outputs.export = true;
        let exported = StackAssembler::new(&config, &inventory()).assemble().unwrap();
        let export = exported.template.output("WafAclRegionalArn").and_then(|o| o.export.clone());
        assert_eq!(export.map(|e| e.name), Some("waf-stack-dev-WafAclRegionalArn".to_string()));
    }

    #[test]
    fn test_excluded_managed_rules() {
        let mut config = Config::for_environment(Some("dev"));
        config
            .web_acl
            .excluded_rules
            .insert(managed::COMMON_RULE_SET.to_string(), vec!["SizeRestrictions_BODY".to_string()]);
        let stack = StackAssembler::new(&config, &inventory()).assemble().unwrap();
        let doc = stack.template.to_json().unwrap();
        let rules = &doc["Resources"]["webACLDev"]["Properties"]["Rules"];
        assert_eq!(
            rules[6]["Statement"]["ManagedRuleGroupStatement"]["ExcludedRules"],
            json!([{"Name": "SizeRestrictions_BODY"}])
        );
        assert_eq!(rules[1]["Statement"]["ManagedRuleGroupStatement"]["ExcludedRules"], json!([]));
    }

    #[test]
    fn test_response_bodies_per_group() {
        let mut config = Config::for_environment(Some("dev"));
        config
            .rule_groups
            .response_body_overrides
            .insert("rate_limit".to_string(), "<div>slow down</div>".to_string());
        let stack = StackAssembler::new(&config, &inventory()).assemble().unwrap();
        let doc = stack.template.to_json().unwrap();
        let body = |group: &str, key: &str| {
            doc["Resources"][group]["Properties"]["CustomResponseBodies"][key]["Content"].clone()
        };
        assert_eq!(body("badUrlRequestRGDev", "badUrlResponse"), "<div>error: access denied by A team</div>");
        assert_eq!(body("blockIpRGDev", "blockIpResponse"), "<div>error: access denied</div>");
        assert_eq!(body("limitIpRequestRGDev", "limitIpResponse"), "<div>slow down</div>");
    }

    #[test]
    fn test_rate_limit_by_forwarded_ip() {
        let doc = dev_stack().template.to_json().unwrap();
        let rate = &doc["Resources"]["limitIpRequestRGDev"]["Properties"]["Rules"][0]["Statement"]["RateBasedStatement"];
        assert_eq!(rate["AggregateKeyType"], "IP");
        assert!(rate.get("ForwardedIPConfig").is_none());

        let mut config = Config::for_environment(Some("dev"));
        config.rule_groups.rate_limit_key = AggregateKeyType::ForwardedIp;
        config.rule_groups.forwarded_ip_header = "X-Client-IP".to_string();
        let stack = StackAssembler::new(&config, &inventory()).assemble().unwrap();
        let doc = stack.template.to_json().unwrap();
        let rate = &doc["Resources"]["limitIpRequestRGDev"]["Properties"]["Rules"][0]["Statement"]["RateBasedStatement"];
        assert_eq!(rate["AggregateKeyType"], "FORWARDED_IP");
        assert_eq!(
            rate["ForwardedIPConfig"],
            json!({"HeaderName": "X-Client-IP", "FallbackBehavior": "NO_MATCH"})
        );
        assert_eq!(rate["Limit"], 100);
    }

    #[test]
    fn test_lookup_failure_propagates() {
        let config = Config::for_environment(Some("dev"));
        let empty = Inventory::default();
        let err = StackAssembler::new(&config, &empty).assemble().unwrap_err();
        assert!(matches!(err, StackError::LoadBalancerNotFound(_)));
    }

    #[test]
    fn test_invalid_existing_topic_rejected() {
        let mut config = Config::for_environment(Some("dev"));
        config.monitoring.existing_topic_arn = Some("not-an-arn".to_string());
        let err = StackAssembler::new(&config, &inventory()).assemble().unwrap_err();
        assert!(matches!(err, StackError::InvalidArn { .. }));
    }
}
