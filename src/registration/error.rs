use crate::registration::step::Step;
use thiserror::Error;

/// Everything that can go wrong while a visitor goes through the registration.
/// The message is shown as is to the visitor.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum RegistrationError {
    #[error("الرجاء إدخال مفتاح الوصول")]
    EmptyKey,
    #[error("المفتاح غير صحيح، الرجاء المحاولة مرة أخرى")]
    InvalidKey,
    #[error("حدث خطأ في الخادم، الرجاء المحاولة لاحقًا")]
    KeyValidationFailed,
    #[error("الرجاء إدخال الاسم الكامل")]
    MissingName,
    #[error("الرجاء اختيار صورة")]
    MissingPhoto,
    #[error("الرجاء إدخال رقم الفرقة")]
    MissingTeamNumber,
    #[error("الرجاء إدخال الرقم التسلسلي")]
    MissingSerialNumber,
    #[error("الرجاء اختيار قائد أو قائدة")]
    MissingGender,
    #[error("نوع الملف غير مدعوم، يرجى اختيار صورة بصيغة PNG أو JPEG")]
    UnsupportedPhotoType,
    #[error("حجم الصورة كبير جداً، الحد الأقصى المسموح به هو 20 ميجابايت")]
    PhotoTooLarge,
    #[error("حدث خطأ أثناء قراءة الصورة")]
    UnreadablePhoto,
    #[error("{0}")]
    SubmissionRejected(String),
    #[error("حدث خطأ أثناء معالجة الطلب")]
    SubmissionFailed,
    #[error("جاري معالجة طلب سابق، الرجاء الانتظار")]
    OperationPending,
    #[error("لا يوجد طلب قيد المعالجة")]
    NoPendingOperation,
    #[error("لا يمكن تنفيذ هذا الإجراء في هذه المرحلة")]
    WrongStep { current: Step, expected: Step },
    #[error("لم يتم تحديد الرتبة، الرجاء إعادة إدخال المفتاح")]
    MissingRank,
    #[error("الملف المطلوب غير موجود")]
    DocumentNotFound,
}

impl RegistrationError {
    /// Errors the visitor can fix by changing what was typed or selected.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RegistrationError::EmptyKey
                | RegistrationError::MissingName
                | RegistrationError::MissingPhoto
                | RegistrationError::MissingTeamNumber
                | RegistrationError::MissingSerialNumber
                | RegistrationError::MissingGender
                | RegistrationError::UnsupportedPhotoType
                | RegistrationError::PhotoTooLarge
        )
    }
}
