//! Message output macros.
//!
//! Every macro routes through [`is_debug_mode`]: with `CLOCKREP_DEBUG` or
//! `RUST_LOG` set, messages become `tracing` events next to the library's own
//! spans and events. Otherwise they are printed to stdout.
//!
//! ```rust
//! use clockrep::{msg_info, msg_success};
//! use clockrep::libs::messages::Message;
//!
//! msg_info!(Message::EntriesLoaded(42));
//! msg_success!(Message::ReportSaved("Acme_All_2024-01.pdf".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

pub const DEBUG_ENV: &str = "CLOCKREP_DEBUG";

/// Whether `CLOCKREP_DEBUG` or `RUST_LOG` is set. Checked once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $prefix:expr, $msg:expr, $spaced:expr) => {{
        let text = format!("{}{}", $prefix, $msg);
        let text = if $spaced { format!("\n{}\n", text) } else { text };
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}", text);
        } else {
            println!("{}", text);
        }
    }};
}

/// Plain line; pass `true` to pad it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, "", $msg, false)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, "", $msg, true)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, "✅ ", $msg, false)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, "⚠️ ", $msg, false)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, "ℹ️ ", $msg, false)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
