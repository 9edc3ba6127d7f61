//! Application lifecycle
//!
//! ```text
//! 1. Configuration Loading
//!    ↓
//! 2. Database connect + schema sync
//!    ↓
//! 3. DI Container Creation + Module Registration
//!    ↓
//! 4. Server Start
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown Signal (SIGTERM/SIGINT)   ← shutdown_signal()
//!    ↓
//! 6. In-flight requests drain
//!    ↓
//! 7. Database pool closed
//! ```

mod shutdown;

pub use shutdown::shutdown_signal;
