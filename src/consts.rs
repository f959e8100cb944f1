pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Default values for the update loop and its gadgets, organized by
    //! functional area. Most of them can be overridden from the config file.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of lines kept in the status log panel.
    pub const MAX_LOG_ENTRIES: usize = 10;

    /// Maximum number of dashboard events kept for the console and diagnostics.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Maximum number of samples kept in the heartbeat chart.
    pub const MAX_CHART_POINTS: usize = 30;

    // =============================================================================
    // UPDATE LOOP
    // =============================================================================

    /// Per-subsystem update intervals (milliseconds)
    pub mod intervals {
        /// Telemetry readouts, waveform redraw and heartbeat sample
        pub const DATA_MS: u64 = 100;
        /// Status log rotation
        pub const LOG_MS: u64 = 1500;
        /// Radar blip regeneration
        pub const RADAR_MS: u64 = 2000;
        /// Status panel randomization
        pub const STATUS_MS: u64 = 2500;
    }

    /// Upper bound on how long the TUI waits for input between frames.
    pub const FRAME_BUDGET_MS: u64 = 33;

    /// How long the splash screen stays up before the dashboard takes over.
    pub const SPLASH_SECS: u64 = 2;

    // =============================================================================
    // TELEMETRY
    // =============================================================================

    pub mod telemetry {
        pub const SYNC_RATE_MIN: f64 = 40.5;
        pub const SYNC_RATE_SPAN: f64 = 2.0;

        pub const CORE_TEMP_MIN: f64 = 82.5;
        pub const CORE_TEMP_SPAN: f64 = 5.0;
        /// Readings strictly above this raise the temperature warning
        pub const CORE_TEMP_WARNING: f64 = 86.0;

        pub const POWER_MIN: f64 = 95.0;
        pub const POWER_SPAN: f64 = 5.0;
    }

    // =============================================================================
    // WAVEFORM
    // =============================================================================

    pub mod waveform {
        /// Logical canvas size
        pub const WIDTH: u32 = 600;
        pub const HEIGHT: u32 = 300;

        /// Distance between grid lines in logical units
        pub const GRID_SPACING: u32 = 50;

        pub const AMPLITUDE: f64 = 100.0;
        /// Radians per logical unit along x
        pub const WAVELENGTH: f64 = 0.05;
        /// Radians per millisecond of phase drift
        pub const SPEED: f64 = 0.005;
        /// Vertical offset of each trace from the center line
        pub const OFFSET: f64 = 10.0;

        pub const GRID_STROKE: f64 = 0.5;
        pub const TRACE_STROKE: f64 = 3.0;
    }

    // =============================================================================
    // RADAR
    // =============================================================================

    pub mod radar {
        pub const MIN_BLIPS: usize = 0;
        pub const MAX_BLIPS: usize = 3;

        /// Blips are placed in an annulus, radius as percent of the scope
        pub const INNER_RADIUS_PCT: f64 = 5.0;
        pub const OUTER_RADIUS_PCT: f64 = 45.0;

        /// How long the warning overlay stays up after the last trigger (milliseconds)
        pub const WARNING_HOLD_MS: u64 = 3000;
    }

    // =============================================================================
    // MAGI
    // =============================================================================

    pub mod magi {
        /// Approval thresholds cycled by the volume control
        pub const THRESHOLDS: [u32; 7] = [1, 10, 33, 50, 66, 90, 65535];
        pub const DEFAULT_THRESHOLD: u32 = 66;

        pub const PRIORITIES: [&str; 5] = ["E", "+++", "A", "AA", "AAA"];
        pub const DEFAULT_PRIORITY: &str = "A";

        pub const DEFAULT_FILE: &str = "MAGI_SYS";

        /// Verdict tones (Hz) and their length (milliseconds)
        pub const REJECT_TONE_HZ: u32 = 3400;
        pub const RESOLVE_TONE_HZ: u32 = 2000;
        pub const TONE_MS: u64 = 800;

        /// Voting carrier and its gating oscillator
        pub const CARRIER_HZ: u32 = 2080;
        pub const LFO_HZ: u32 = 10;
        pub const LFO_EX_MODE_HZ: u32 = 30;

        /// Screen stays in its loading state for this long (milliseconds)
        pub const LOADING_MS: u64 = 1000;
    }
}
