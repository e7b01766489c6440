pub struct Icons;

impl Icons {
    pub const CHECK: &'static str = "✅";
    pub const CROSS: &'static str = "❌";
    pub const WARN: &'static str = "⚠️";
    pub const INFO: &'static str = "ℹ️";
    pub const STATS: &'static str = "📊";
    pub const STUDENT: &'static str = "🎓";
    pub const COURSE: &'static str = "📚";
    pub const GRADE: &'static str = "📝";
    pub const LINK: &'static str = "🔗";
    pub const SAVE: &'static str = "💾";
    pub const FOLDER: &'static str = "📂";
    pub const WAVE: &'static str = "👋";
}
