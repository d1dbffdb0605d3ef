/// Common shape of every record the back-office shows
///
/// `concurrency_stamp` is an opaque version token issued by the backend; the
/// client only echoes it back on destructive calls.
pub trait AdminRecord {
    fn id(&self) -> &str;
    fn display_name(&self) -> String;
    fn concurrency_stamp(&self) -> &str;
}
