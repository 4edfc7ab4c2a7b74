//! Display-string tables and language selection.
//!
//! Every user-visible string lives in a [`Strings`] table; switching the
//! active [`Language`] swaps the whole table at once and never touches any
//! form state. The tables are static so lookups are free and the set of keys
//! is checked at compile time.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tr,
    En,
    De,
    Ru,
    Uk,
    Es,
}

impl Language {
    /// All selectable languages, in menu order.
    pub const ALL: [Language; 6] = [
        Language::Tr,
        Language::En,
        Language::De,
        Language::Ru,
        Language::Uk,
        Language::Es,
    ];

    /// Lowercase language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
            Self::De => "de",
            Self::Ru => "ru",
            Self::Uk => "uk",
            Self::Es => "es",
        }
    }

    /// Name of the language in that language, for the picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Tr => "Türkçe",
            Self::En => "English",
            Self::De => "Deutsch",
            Self::Ru => "Русский",
            Self::Uk => "Українська",
            Self::Es => "Español",
        }
    }
}

/// Pick a language from the process locale, falling back to Turkish.
pub fn detect() -> Language {
    let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
        .to_lowercase();
    from_locale(&locale)
}

fn from_locale(locale: &str) -> Language {
    if locale.starts_with("en") {
        Language::En
    } else if locale.starts_with("de") {
        Language::De
    } else if locale.starts_with("ru") {
        Language::Ru
    } else if locale.starts_with("uk") {
        Language::Uk
    } else if locale.starts_with("es") {
        Language::Es
    } else {
        Language::Tr
    }
}

/// Complete table of user-visible strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub page_title: &'static str,
    pub page_subtitle: &'static str,
    pub label_site: &'static str,
    pub label_title: &'static str,
    pub label_category: &'static str,
    pub label_description: &'static str,
    pub label_page_url: &'static str,
    pub contact_toggle: &'static str,
    pub label_full_name: &'static str,
    pub label_phone: &'static str,
    pub label_email: &'static str,
    pub label_images: &'static str,
    pub drop_text: &'static str,
    pub browse_btn: &'static str,
    pub remove_image: &'static str,
    pub submit_btn: &'static str,
    pub sending: &'static str,
    pub error_generic: &'static str,
    pub auto_detected: &'static str,
    pub select_placeholder: &'static str,
    pub site_select_placeholder: &'static str,
    pub cat_design: &'static str,
    pub cat_functionality: &'static str,
    pub cat_performance: &'static str,
    pub cat_content: &'static str,
    pub cat_mobile: &'static str,
    pub cat_security: &'static str,
    pub cat_other: &'static str,
    pub title_placeholder_bug: &'static str,
    pub title_placeholder_request: &'static str,
    pub desc_placeholder_bug: &'static str,
    pub desc_placeholder_request: &'static str,
    pub err_site_required: &'static str,
    pub err_title_required: &'static str,
    pub err_category_required: &'static str,
    pub err_description_required: &'static str,
    pub err_page_url_domain: &'static str,
    pub max_images: &'static str,
    pub type_bug: &'static str,
    pub type_request: &'static str,
    pub success_title: &'static str,
    pub success_text: &'static str,
    pub new_report: &'static str,
    pub verify_title: &'static str,
    pub verify_open_btn: &'static str,
    pub verify_paste_placeholder: &'static str,
    pub verify_confirm_btn: &'static str,
    pub verify_invalid_token: &'static str,
    pub verify_done: &'static str,
    pub verify_pending: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub status_ready: &'static str,
    pub status_sent: &'static str,
    pub status_failed: &'static str,
}

/// Return the string table for a language.
pub fn table(lang: Language) -> &'static Strings {
    match lang {
        Language::Tr => &TR,
        Language::En => &EN,
        Language::De => &DE,
        Language::Ru => &RU,
        Language::Uk => &UK,
        Language::Es => &ES,
    }
}

static TR: Strings = Strings {
    page_title: "Geri Bildirim",
    page_subtitle: "Geri bildiriminizi paylaşın",
    label_site: "Site",
    label_title: "Başlık",
    label_category: "Kategori",
    label_description: "Açıklama",
    label_page_url: "Sayfa URL'i",
    contact_toggle: "Sizinle iletişime geçelim mi?",
    label_full_name: "Ad Soyad",
    label_phone: "Telefon",
    label_email: "E-posta",
    label_images: "Görseller (Maks. 5)",
    drop_text: "Dosyaları pencereye sürükleyin",
    browse_btn: "Dosya seç…",
    remove_image: "Kaldır",
    submit_btn: "Gönder",
    sending: "Gönderiliyor...",
    error_generic: "Bir hata oluştu. Lütfen tekrar deneyin.",
    auto_detected: "Otomatik algılandı",
    select_placeholder: "Seçin...",
    site_select_placeholder: "Site seçin...",
    cat_design: "Tasarım",
    cat_functionality: "İşlevsellik",
    cat_performance: "Performans",
    cat_content: "İçerik",
    cat_mobile: "Mobil",
    cat_security: "Güvenlik",
    cat_other: "Diğer",
    title_placeholder_bug: "Hatanın kısa başlığını yazın",
    title_placeholder_request: "Önerinizin kısa başlığını yazın",
    desc_placeholder_bug: "Hatayı detaylı olarak açıklayın. Ne yaptığınızda, ne olmasını beklediğinizde ve ne olduğunu belirtin.",
    desc_placeholder_request: "Önerinizi detaylı olarak açıklayın. Ne istediğinizi ve neden faydalı olacağını belirtin.",
    err_site_required: "Lütfen bir site seçiniz",
    err_title_required: "Lütfen başlık giriniz",
    err_category_required: "Lütfen kategori seçiniz",
    err_description_required: "Lütfen açıklama giriniz",
    err_page_url_domain: "Sayfa URL'i seçilen siteyle eşleşmiyor",
    max_images: "En fazla 5 görsel yüklenebilir",
    type_bug: "Hata Bildirimi",
    type_request: "Öneriler",
    success_title: "Teşekkürler!",
    success_text: "Geri bildiriminiz başarıyla gönderildi. En kısa sürede değerlendirilecektir.",
    new_report: "Yeni Bildirim",
    verify_title: "Güvenlik doğrulaması",
    verify_open_btn: "Doğrulama sayfasını aç",
    verify_paste_placeholder: "Doğrulama kodunu yapıştırın",
    verify_confirm_btn: "Onayla",
    verify_invalid_token: "Kod geçerli görünmüyor. Doğrulama sayfasından kopyalayın.",
    verify_done: "Doğrulandı",
    verify_pending: "Göndermeden önce doğrulama gerekli",
    theme_light: "Açık",
    theme_dark: "Koyu",
    theme_system: "Sistem",
    status_ready: "Hazır",
    status_sent: "Bildirim gönderildi",
    status_failed: "Gönderim başarısız",
};

static EN: Strings = Strings {
    page_title: "Feedback",
    page_subtitle: "Share your feedback",
    label_site: "Site",
    label_title: "Title",
    label_category: "Category",
    label_description: "Description",
    label_page_url: "Page URL",
    contact_toggle: "Would you like us to contact you?",
    label_full_name: "Full Name",
    label_phone: "Phone",
    label_email: "Email",
    label_images: "Screenshots (Max 5)",
    drop_text: "Drag files onto the window",
    browse_btn: "Choose files…",
    remove_image: "Remove",
    submit_btn: "Submit",
    sending: "Sending...",
    error_generic: "An error occurred. Please try again.",
    auto_detected: "Auto-detected",
    select_placeholder: "Select...",
    site_select_placeholder: "Select a site...",
    cat_design: "Design",
    cat_functionality: "Functionality",
    cat_performance: "Performance",
    cat_content: "Content",
    cat_mobile: "Mobile",
    cat_security: "Security",
    cat_other: "Other",
    title_placeholder_bug: "Short title for the bug",
    title_placeholder_request: "Short title for your suggestion",
    desc_placeholder_bug: "Describe the bug in detail. What did you do, what did you expect, and what happened?",
    desc_placeholder_request: "Describe your suggestion in detail. What would you like and why would it be useful?",
    err_site_required: "Please select a site",
    err_title_required: "Please enter a title",
    err_category_required: "Please select a category",
    err_description_required: "Please enter a description",
    err_page_url_domain: "The page URL does not match the selected site",
    max_images: "Maximum 5 images allowed",
    type_bug: "Bug Report",
    type_request: "Suggestions",
    success_title: "Thank you!",
    success_text: "Your feedback has been submitted successfully. It will be reviewed shortly.",
    new_report: "New Report",
    verify_title: "Human verification",
    verify_open_btn: "Open verification page",
    verify_paste_placeholder: "Paste the verification code",
    verify_confirm_btn: "Confirm",
    verify_invalid_token: "That code does not look valid. Copy it from the verification page.",
    verify_done: "Verified",
    verify_pending: "Verification required before submitting",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System",
    status_ready: "Ready",
    status_sent: "Report sent",
    status_failed: "Submission failed",
};

static DE: Strings = Strings {
    page_title: "Feedback",
    page_subtitle: "Teilen Sie Ihr Feedback",
    label_site: "Webseite",
    label_title: "Titel",
    label_category: "Kategorie",
    label_description: "Beschreibung",
    label_page_url: "Seiten-URL",
    contact_toggle: "Sollen wir Sie kontaktieren?",
    label_full_name: "Vollständiger Name",
    label_phone: "Telefon",
    label_email: "E-Mail",
    label_images: "Bilder (Max. 5)",
    drop_text: "Dateien auf das Fenster ziehen",
    browse_btn: "Dateien auswählen…",
    remove_image: "Entfernen",
    submit_btn: "Absenden",
    sending: "Wird gesendet...",
    error_generic: "Ein Fehler ist aufgetreten. Bitte versuchen Sie es erneut.",
    auto_detected: "Automatisch erkannt",
    select_placeholder: "Auswählen...",
    site_select_placeholder: "Webseite auswählen...",
    cat_design: "Design",
    cat_functionality: "Funktionalität",
    cat_performance: "Leistung",
    cat_content: "Inhalt",
    cat_mobile: "Mobil",
    cat_security: "Sicherheit",
    cat_other: "Sonstiges",
    title_placeholder_bug: "Kurzer Titel für den Fehler",
    title_placeholder_request: "Kurzer Titel für Ihren Vorschlag",
    desc_placeholder_bug: "Beschreiben Sie den Fehler im Detail. Was haben Sie getan, was erwartet und was ist passiert?",
    desc_placeholder_request: "Beschreiben Sie Ihren Vorschlag im Detail. Was wünschen Sie sich und warum wäre es nützlich?",
    err_site_required: "Bitte wählen Sie eine Webseite",
    err_title_required: "Bitte geben Sie einen Titel ein",
    err_category_required: "Bitte wählen Sie eine Kategorie",
    err_description_required: "Bitte geben Sie eine Beschreibung ein",
    err_page_url_domain: "Die Seiten-URL passt nicht zur gewählten Webseite",
    max_images: "Maximal 5 Bilder erlaubt",
    type_bug: "Fehlerbericht",
    type_request: "Vorschläge",
    success_title: "Vielen Dank!",
    success_text: "Ihr Feedback wurde erfolgreich gesendet. Es wird in Kürze bearbeitet.",
    new_report: "Neuer Bericht",
    verify_title: "Sicherheitsprüfung",
    verify_open_btn: "Verifizierungsseite öffnen",
    verify_paste_placeholder: "Verifizierungscode einfügen",
    verify_confirm_btn: "Bestätigen",
    verify_invalid_token: "Der Code scheint ungültig zu sein. Kopieren Sie ihn von der Verifizierungsseite.",
    verify_done: "Verifiziert",
    verify_pending: "Verifizierung vor dem Absenden erforderlich",
    theme_light: "Hell",
    theme_dark: "Dunkel",
    theme_system: "System",
    status_ready: "Bereit",
    status_sent: "Bericht gesendet",
    status_failed: "Senden fehlgeschlagen",
};

static RU: Strings = Strings {
    page_title: "Обратная связь",
    page_subtitle: "Поделитесь отзывом",
    label_site: "Сайт",
    label_title: "Заголовок",
    label_category: "Категория",
    label_description: "Описание",
    label_page_url: "URL страницы",
    contact_toggle: "Хотите, чтобы мы связались с вами?",
    label_full_name: "Полное имя",
    label_phone: "Телефон",
    label_email: "Эл. почта",
    label_images: "Изображения (Макс. 5)",
    drop_text: "Перетащите файлы в окно",
    browse_btn: "Выбрать файлы…",
    remove_image: "Удалить",
    submit_btn: "Отправить",
    sending: "Отправка...",
    error_generic: "Произошла ошибка. Попробуйте снова.",
    auto_detected: "Определено автоматически",
    select_placeholder: "Выбрать...",
    site_select_placeholder: "Выбрать сайт...",
    cat_design: "Дизайн",
    cat_functionality: "Функциональность",
    cat_performance: "Производительность",
    cat_content: "Контент",
    cat_mobile: "Мобильный",
    cat_security: "Безопасность",
    cat_other: "Другое",
    title_placeholder_bug: "Короткий заголовок ошибки",
    title_placeholder_request: "Короткий заголовок предложения",
    desc_placeholder_bug: "Подробно опишите ошибку. Что вы делали, что ожидали и что произошло?",
    desc_placeholder_request: "Подробно опишите предложение. Что вы хотите и почему это будет полезно?",
    err_site_required: "Пожалуйста, выберите сайт",
    err_title_required: "Пожалуйста, введите заголовок",
    err_category_required: "Пожалуйста, выберите категорию",
    err_description_required: "Пожалуйста, введите описание",
    err_page_url_domain: "URL страницы не соответствует выбранному сайту",
    max_images: "Максимум 5 изображений",
    type_bug: "Ошибка",
    type_request: "Предложения",
    success_title: "Спасибо!",
    success_text: "Ваш отзыв успешно отправлен. Он будет рассмотрен в ближайшее время.",
    new_report: "Новый отчёт",
    verify_title: "Проверка безопасности",
    verify_open_btn: "Открыть страницу проверки",
    verify_paste_placeholder: "Вставьте код проверки",
    verify_confirm_btn: "Подтвердить",
    verify_invalid_token: "Код выглядит недействительным. Скопируйте его со страницы проверки.",
    verify_done: "Проверено",
    verify_pending: "Перед отправкой требуется проверка",
    theme_light: "Светлая",
    theme_dark: "Тёмная",
    theme_system: "Системная",
    status_ready: "Готово",
    status_sent: "Отчёт отправлен",
    status_failed: "Не удалось отправить",
};

static UK: Strings = Strings {
    page_title: "Зворотний зв'язок",
    page_subtitle: "Поділіться відгуком",
    label_site: "Сайт",
    label_title: "Заголовок",
    label_category: "Категорія",
    label_description: "Опис",
    label_page_url: "URL сторінки",
    contact_toggle: "Бажаєте, щоб ми зв'язалися з вами?",
    label_full_name: "Повне ім'я",
    label_phone: "Телефон",
    label_email: "Ел. пошта",
    label_images: "Зображення (Макс. 5)",
    drop_text: "Перетягніть файли у вікно",
    browse_btn: "Вибрати файли…",
    remove_image: "Видалити",
    submit_btn: "Відправити",
    sending: "Відправка...",
    error_generic: "Сталася помилка. Будь ласка, спробуйте ще раз.",
    auto_detected: "Визначено автоматично",
    select_placeholder: "Обрати...",
    site_select_placeholder: "Обрати сайт...",
    cat_design: "Дизайн",
    cat_functionality: "Функціональність",
    cat_performance: "Продуктивність",
    cat_content: "Контент",
    cat_mobile: "Мобільний",
    cat_security: "Безпека",
    cat_other: "Інше",
    title_placeholder_bug: "Короткий заголовок помилки",
    title_placeholder_request: "Короткий заголовок пропозиції",
    desc_placeholder_bug: "Детально опишіть помилку. Що ви робили, що очікували і що сталося?",
    desc_placeholder_request: "Детально опишіть пропозицію. Що ви бажаєте і чому це буде корисно?",
    err_site_required: "Будь ласка, оберіть сайт",
    err_title_required: "Будь ласка, введіть заголовок",
    err_category_required: "Будь ласка, оберіть категорію",
    err_description_required: "Будь ласка, введіть опис",
    err_page_url_domain: "URL сторінки не відповідає вибраному сайту",
    max_images: "Максимум 5 зображень",
    type_bug: "Помилка",
    type_request: "Пропозиції",
    success_title: "Дякуємо!",
    success_text: "Ваш відгук успішно відправлено. Він буде розглянутий найближчим часом.",
    new_report: "Новий звіт",
    verify_title: "Перевірка безпеки",
    verify_open_btn: "Відкрити сторінку перевірки",
    verify_paste_placeholder: "Вставте код перевірки",
    verify_confirm_btn: "Підтвердити",
    verify_invalid_token: "Код виглядає недійсним. Скопіюйте його зі сторінки перевірки.",
    verify_done: "Перевірено",
    verify_pending: "Перед відправленням потрібна перевірка",
    theme_light: "Світла",
    theme_dark: "Темна",
    theme_system: "Системна",
    status_ready: "Готово",
    status_sent: "Звіт надіслано",
    status_failed: "Не вдалося надіслати",
};

static ES: Strings = Strings {
    page_title: "Comentarios",
    page_subtitle: "Comparta sus comentarios",
    label_site: "Sitio",
    label_title: "Título",
    label_category: "Categoría",
    label_description: "Descripción",
    label_page_url: "URL de la página",
    contact_toggle: "¿Desea que le contactemos?",
    label_full_name: "Nombre completo",
    label_phone: "Teléfono",
    label_email: "Correo electrónico",
    label_images: "Imágenes (Máx. 5)",
    drop_text: "Arrastre archivos a la ventana",
    browse_btn: "Elegir archivos…",
    remove_image: "Quitar",
    submit_btn: "Enviar",
    sending: "Enviando...",
    error_generic: "Ocurrió un error. Por favor, inténtelo de nuevo.",
    auto_detected: "Detectado automáticamente",
    select_placeholder: "Seleccionar...",
    site_select_placeholder: "Seleccionar sitio...",
    cat_design: "Diseño",
    cat_functionality: "Funcionalidad",
    cat_performance: "Rendimiento",
    cat_content: "Contenido",
    cat_mobile: "Móvil",
    cat_security: "Seguridad",
    cat_other: "Otro",
    title_placeholder_bug: "Título breve del error",
    title_placeholder_request: "Título breve de su sugerencia",
    desc_placeholder_bug: "Describa el error en detalle. ¿Qué hizo, qué esperaba y qué ocurrió?",
    desc_placeholder_request: "Describa su sugerencia en detalle. ¿Qué le gustaría y por qué sería útil?",
    err_site_required: "Por favor, seleccione un sitio",
    err_title_required: "Por favor, ingrese un título",
    err_category_required: "Por favor, seleccione una categoría",
    err_description_required: "Por favor, ingrese una descripción",
    err_page_url_domain: "La URL de la página no coincide con el sitio seleccionado",
    max_images: "Máximo 5 imágenes permitidas",
    type_bug: "Informe de error",
    type_request: "Sugerencias",
    success_title: "¡Gracias!",
    success_text: "Sus comentarios se han enviado correctamente. Se revisarán en breve.",
    new_report: "Nuevo informe",
    verify_title: "Verificación de seguridad",
    verify_open_btn: "Abrir página de verificación",
    verify_paste_placeholder: "Pegue el código de verificación",
    verify_confirm_btn: "Confirmar",
    verify_invalid_token: "El código no parece válido. Cópielo de la página de verificación.",
    verify_done: "Verificado",
    verify_pending: "Se requiere verificación antes de enviar",
    theme_light: "Claro",
    theme_dark: "Oscuro",
    theme_system: "Sistema",
    status_ready: "Listo",
    status_sent: "Informe enviado",
    status_failed: "Error al enviar",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_prefixes_map_to_languages() {
        assert_eq!(from_locale("en_us.utf-8"), Language::En);
        assert_eq!(from_locale("de_de"), Language::De);
        assert_eq!(from_locale("uk_ua.utf-8"), Language::Uk);
        assert_eq!(from_locale("es_mx"), Language::Es);
    }

    #[test]
    fn unknown_locale_falls_back_to_turkish() {
        assert_eq!(from_locale(""), Language::Tr);
        assert_eq!(from_locale("fr_fr"), Language::Tr);
    }

    #[test]
    fn every_language_has_a_table() {
        for lang in Language::ALL {
            let strings = table(lang);
            assert!(!strings.submit_btn.is_empty());
            assert!(!strings.err_page_url_domain.is_empty());
        }
    }
}
