use ledger_common::CommonError;
use soroban_sdk::{contracttype, log, Address, Env, String};

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: empty or oversized input, null address
    Validation = 1,
    /// Authorization errors: caller is not the owner or not on the allow-list
    Authorization = 2,
    /// Not found errors: record index beyond the owner's sequence
    NotFound = 3,
    /// State conflict errors: duplicate ids, inactive records
    StateConflict = 4,
    /// System errors: contract lifecycle problems
    System = 5,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Caller mistakes that are fixed by correcting input
    Low = 1,
    /// Permission failures worth surfacing to operators
    Medium = 2,
    /// Deployment problems requiring immediate action
    High = 3,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub user: Option<Address>,
    pub resource_id: Option<String>,
    pub timestamp: u64,
    pub retryable: bool,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidArgument = 4,
    AlreadyExists = 5,
    OutOfRange = 6,
    InvalidState = 7,
}

impl From<CommonError> for ContractError {
    fn from(error: CommonError) -> Self {
        match error {
            CommonError::InvalidInput => ContractError::InvalidArgument,
        }
    }
}

impl ContractError {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ContractError::NotInitialized),
            2 => Some(ContractError::AlreadyInitialized),
            3 => Some(ContractError::Unauthorized),
            4 => Some(ContractError::InvalidArgument),
            5 => Some(ContractError::AlreadyExists),
            6 => Some(ContractError::OutOfRange),
            7 => Some(ContractError::InvalidState),
            _ => None,
        }
    }

    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidArgument => ErrorCategory::Validation,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::OutOfRange => ErrorCategory::NotFound,
            ContractError::AlreadyExists | ContractError::InvalidState => {
                ErrorCategory::StateConflict
            }
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::System
            }
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidArgument
            | ContractError::AlreadyExists
            | ContractError::OutOfRange
            | ContractError::InvalidState => ErrorSeverity::Low,
            ContractError::Unauthorized | ContractError::AlreadyInitialized => {
                ErrorSeverity::Medium
            }
            ContractError::NotInitialized => ErrorSeverity::High,
        }
    }

    /// The ledger never retries on its own. Every failure is final for the
    /// submitted input; callers correct it and submit a new call.
    pub fn retryable(&self) -> bool {
        false
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::InvalidArgument => "Invalid input parameters provided",
            ContractError::AlreadyExists => "Record with this ID already exists",
            ContractError::OutOfRange => "Record index out of range",
            ContractError::InvalidState => "Record is not active",
        }
    }
}

/// Creates an ErrorContext structure from an error and optional user/resource information.
/// The context includes automatically determined category, severity, message, and retryable flag.
pub fn create_error_context(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    resource_id: Option<String>,
) -> ErrorContext {
    ErrorContext {
        category: error.category(),
        severity: error.severity(),
        message: String::from_str(env, error.message()),
        user,
        resource_id,
        timestamp: env.ledger().timestamp(),
        retryable: error.retryable(),
    }
}

/// Writes a diagnostic line for a failed operation and hands the error back
/// so callers can `map_err` through it.
///
/// Nothing is published: a failed invocation discards its contract events
/// along with its storage writes. Classification is available through
/// `get_error_info`.
pub fn report_error(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    operation: &str,
) -> ContractError {
    let operation = String::from_str(env, operation);
    let code = error as u32;
    log!(env, "operation failed", operation, code, user);
    error
}
