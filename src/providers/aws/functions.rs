// Standard library
use std::error::Error;
use std::fmt::Debug;

// 3rd party crates
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_elasticloadbalancing::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_elasticloadbalancing::operation::{
    describe_instance_health::DescribeInstanceHealthError,
    describe_load_balancers::DescribeLoadBalancersError as ClassicDescribeError,
};
use aws_sdk_elasticloadbalancingv2::operation::{
    describe_load_balancers::DescribeLoadBalancersError as ApplicationDescribeError,
    describe_target_groups::DescribeTargetGroupsError,
};
use tracing::debug;

// Project imports
use crate::providers::errors::{ProviderError, SessionError};

// Current module imports
use super::constants::THROTTLING_CODES;

/// Builds the shared SDK configuration.
///
/// Resolution order follows the SDK default chain; an explicit `profile` or
/// `region` takes precedence over environment and config files.
pub async fn load_sdk_config(
    profile: Option<String>,
    region: Option<String>,
) -> Result<SdkConfig, SessionError> {
    let mut config_loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = region {
        config_loader = config_loader.region(Region::new(region));
    }

    if let Some(profile) = profile {
        config_loader = config_loader.profile_name(profile);
    }

    let config: SdkConfig = config_loader.load().await;
    match config.region() {
        Some(region) => {
            debug!(region = %region, "Resolved AWS region");
            Ok(config)
        }
        None => Err(SessionError::NoRegion),
    }
}

/// Maps any SDK failure that is not a not-found condition.
pub(super) fn api_error<E, R>(operation: &str, err: SdkError<E, R>) -> ProviderError
where
    E: ProvideErrorMetadata + Error + 'static,
    R: Debug,
{
    let code: Option<&str> = err.as_service_error().and_then(|e| e.code());
    let message: String = DisplayErrorContext(&err).to_string();

    match code {
        Some(code) if THROTTLING_CODES.contains(&code) => ProviderError::Throttled {
            operation: operation.to_string(),
            message,
        },
        _ => ProviderError::Api {
            operation: operation.to_string(),
            message,
        },
    }
}

/// elb `DescribeLoadBalancers`: `AccessPointNotFound` means no such name.
pub(super) fn classic_listing_error<R: Debug>(
    names: &[String],
    err: SdkError<ClassicDescribeError, R>,
) -> ProviderError {
    let not_found: bool = err
        .as_service_error()
        .is_some_and(|e| e.is_access_point_not_found_exception());
    if not_found {
        ProviderError::NotFound(names.join(","))
    } else {
        api_error("elb:DescribeLoadBalancers", err)
    }
}

pub(super) fn instance_health_error<R: Debug>(
    name: &str,
    err: SdkError<DescribeInstanceHealthError, R>,
) -> ProviderError {
    let not_found: bool = err
        .as_service_error()
        .is_some_and(|e| e.is_access_point_not_found_exception());
    if not_found {
        ProviderError::NotFound(name.to_string())
    } else {
        api_error("elb:DescribeInstanceHealth", err)
    }
}

/// elbv2 `DescribeLoadBalancers`: `LoadBalancerNotFound` means no such name.
pub(super) fn application_listing_error<R: Debug>(
    names: &[String],
    err: SdkError<ApplicationDescribeError, R>,
) -> ProviderError {
    let not_found: bool = err
        .as_service_error()
        .is_some_and(|e| e.is_load_balancer_not_found_exception());
    if not_found {
        ProviderError::NotFound(names.join(","))
    } else {
        api_error("elbv2:DescribeLoadBalancers", err)
    }
}

pub(super) fn target_groups_error<R: Debug>(
    load_balancer_arn: &str,
    err: SdkError<DescribeTargetGroupsError, R>,
) -> ProviderError {
    let not_found: bool = err
        .as_service_error()
        .is_some_and(|e| e.is_load_balancer_not_found_exception());
    if not_found {
        ProviderError::NotFound(load_balancer_arn.to_string())
    } else {
        api_error("elbv2:DescribeTargetGroups", err)
    }
}
