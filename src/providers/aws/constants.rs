/// Error codes both APIs use to signal request throttling.
pub const THROTTLING_CODES: [&str; 4] = [
    "Throttling",
    "ThrottlingException",
    "RequestLimitExceeded",
    "DependencyThrottle",
];
