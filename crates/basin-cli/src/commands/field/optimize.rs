/// Notification text shown by the optimization placeholder. The control is
/// cosmetic: no computation runs, and the text never varies. The real
/// planner lives behind `bsn solve` and report submission.
pub const NOTICE: &str = "Dijkstra optimization triggered";

/// Handle `bsn field optimize`.
pub fn run() {
    println!("{NOTICE}");
}
