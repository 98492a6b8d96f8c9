use rand::seq::IndexedRandom;
use serde::Serialize;
use std::time::{Duration, Instant};

const MAX_PERCENT: u8 = 90;

const QUOTES: [&str; 8] = [
    "الصبر مفتاح الفرج",
    "من جد وجد، ومن زرع حصد",
    "العلم نور والجهل ظلام",
    "خير الأمور أوسطها",
    "اطلبوا العلم من المهد إلى اللحد",
    "رب همة أحيت أمة",
    "الوقت كالسيف إن لم تقطعه قطعك",
    "كن مستعدا",
];

/// The backend calls a visitor waits for.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    KeyValidation,
    Submission,
}

impl Operation {
    /// How long the call usually lasts. Only used to animate the progress bar.
    pub fn expected_duration(&self) -> Duration {
        match self {
            Operation::KeyValidation => Duration::from_secs(1),
            Operation::Submission => Duration::from_secs(2),
        }
    }

    fn stages(&self) -> [&'static str; 3] {
        match self {
            Operation::KeyValidation => [
                "جاري الاتصال بالخادم...",
                "جاري التحقق من المفتاح...",
                "جاري تحميل البيانات...",
            ],
            Operation::Submission => [
                "جاري رفع البيانات...",
                "جاري معالجة الصورة...",
                "جاري إنشاء الملفات...",
            ],
        }
    }
}

/// Cosmetic progress of a pending operation. It never reaches 100%:
/// the page is replaced once the operation is over.
#[derive(Debug, PartialEq, Clone)]
pub struct Progress {
    operation: Operation,
    started_at: Instant,
    quote: &'static str,
}

impl Progress {
    pub fn start(operation: Operation) -> Self {
        Self {
            operation,
            started_at: Instant::now(),
            quote: QUOTES.choose(&mut rand::rng()).copied().unwrap_or_default(),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }

    pub fn percent(&self) -> u8 {
        percent_after(self.operation, self.started_at.elapsed())
    }

    pub fn text(&self) -> &'static str {
        stage_at(self.operation, self.percent())
    }
}

fn percent_after(operation: Operation, elapsed: Duration) -> u8 {
    let expected = operation.expected_duration().as_millis().max(1);
    let percent = elapsed.as_millis() * u128::from(MAX_PERCENT) / expected;

    percent.min(u128::from(MAX_PERCENT)) as u8
}

fn stage_at(operation: Operation, percent: u8) -> &'static str {
    let [connecting, processing, finishing] = operation.stages();
    match percent {
        0..30 => connecting,
        30..60 => processing,
        _ => finishing,
    }
}
