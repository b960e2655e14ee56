//! Built-in dictionaries for the common validation rule set.
//!
//! Presets are plain values; nothing is registered implicitly. Merge one
//! into an [`Interpolator`](crate::Interpolator) (or the global one) and
//! override individual entries by merging a partial dictionary on top.
//!
//! # Example
//!
//! ```
//! use valoc::{Interpolator, presets};
//!
//! let mut interpolator = Interpolator::new();
//! interpolator.merge("en", presets::en());
//! interpolator.merge("de", presets::de());
//! interpolator.set_locale("de").unwrap();
//! ```

use crate::interpolator::LocaleDictionary;

/// Build a dictionary from rule and template pairs.
fn messages(entries: &[(&str, &str)]) -> LocaleDictionary {
    LocaleDictionary {
        messages: entries
            .iter()
            .map(|(rule, template)| ((*rule).to_string(), (*template).to_string()))
            .collect(),
        ..LocaleDictionary::default()
    }
}

/// English messages.
pub fn en() -> LocaleDictionary {
    messages(&[
        (
            "alpha",
            "The {field} field may only contain alphabetic characters",
        ),
        (
            "alpha_num",
            "The {field} field may only contain alpha-numeric characters",
        ),
        (
            "between",
            "The {field} field must be between 0:{min} and 1:{max}",
        ),
        ("confirmed", "The {field} field confirmation does not match"),
        (
            "digits",
            "The {field} field must be numeric and exactly contain 0:{length} digits",
        ),
        ("email", "The {field} field must be a valid email"),
        ("integer", "The {field} field must be an integer"),
        (
            "max",
            "The {field} field may not be greater than 0:{length} characters",
        ),
        ("max_value", "The {field} field must be 0:{max} or less"),
        (
            "min",
            "The {field} field must be at least 0:{length} characters",
        ),
        ("min_value", "The {field} field must be 0:{min} or more"),
        (
            "numeric",
            "The {field} field may only contain numeric characters",
        ),
        ("one_of", "The {field} field is not a valid value"),
        ("regex", "The {field} field format is invalid"),
        ("required", "The {field} field is required"),
        (
            "size",
            "The {field} field size must be less than 0:{size}KB",
        ),
    ])
}

/// German messages.
pub fn de() -> LocaleDictionary {
    messages(&[
        ("alpha", "{field} darf nur alphabetische Zeichen enthalten"),
        (
            "alpha_num",
            "{field} darf nur alphanumerische Zeichen enthalten",
        ),
        ("between", "{field} muss zwischen 0:{min} und 1:{max} liegen"),
        (
            "confirmed",
            "Die Bestätigung von {field} stimmt nicht überein",
        ),
        (
            "digits",
            "{field} muss numerisch sein und exakt 0:{length} Ziffern enthalten",
        ),
        ("email", "{field} muss eine gültige E-Mail-Adresse sein"),
        ("integer", "{field} muss eine ganze Zahl sein"),
        ("max", "{field} darf nicht länger als 0:{length} Zeichen sein"),
        ("max_value", "{field} darf maximal 0:{max} sein"),
        ("min", "{field} muss mindestens 0:{length} Zeichen lang sein"),
        ("min_value", "{field} muss mindestens 0:{min} sein"),
        ("numeric", "{field} darf nur numerische Zeichen enthalten"),
        ("one_of", "{field} muss ein gültiger Wert sein"),
        ("regex", "Das Format von {field} ist ungültig"),
        ("required", "{field} ist ein Pflichtfeld"),
        ("size", "{field} muss kleiner als 0:{size}KB sein"),
    ])
}

/// Spanish messages.
pub fn es() -> LocaleDictionary {
    messages(&[
        ("alpha", "El campo {field} solo debe contener letras"),
        (
            "alpha_num",
            "El campo {field} solo debe contener letras y números",
        ),
        (
            "between",
            "El campo {field} debe estar entre 0:{min} y 1:{max}",
        ),
        ("confirmed", "El campo {field} no coincide"),
        (
            "digits",
            "El campo {field} debe ser numérico y contener exactamente 0:{length} dígitos",
        ),
        (
            "email",
            "El campo {field} debe ser un correo electrónico válido",
        ),
        ("integer", "El campo {field} debe ser un número entero"),
        (
            "max",
            "El campo {field} no debe ser mayor a 0:{length} caracteres",
        ),
        ("max_value", "El campo {field} debe de ser 0:{max} o menor"),
        (
            "min",
            "El campo {field} debe tener al menos 0:{length} caracteres",
        ),
        ("min_value", "El campo {field} debe ser 0:{min} o superior"),
        (
            "numeric",
            "El campo {field} debe contener solo caracteres numéricos",
        ),
        ("one_of", "El campo {field} debe ser un valor válido"),
        ("regex", "El formato del campo {field} no es válido"),
        ("required", "El campo {field} es obligatorio"),
        ("size", "El campo {field} debe ser menor a 0:{size}KB"),
    ])
}

/// Russian messages.
pub fn ru() -> LocaleDictionary {
    messages(&[
        ("alpha", "Поле {field} может содержать только буквы"),
        (
            "alpha_num",
            "Поле {field} может содержать только буквы и цифры",
        ),
        ("between", "Поле {field} должно быть между 0:{min} и 1:{max}"),
        ("confirmed", "Поле {field} не совпадает с подтверждением"),
        (
            "digits",
            "Поле {field} должно быть числовым и содержать ровно 0:{length} цифр",
        ),
        (
            "email",
            "Поле {field} должно быть действительным электронным адресом",
        ),
        ("integer", "Поле {field} должно быть целым числом"),
        (
            "max",
            "Поле {field} не может быть длиннее 0:{length} символов",
        ),
        ("max_value", "Поле {field} должно быть 0:{max} или меньше"),
        ("min", "Поле {field} должно быть не менее 0:{length} символов"),
        ("min_value", "Поле {field} должно быть 0:{min} или больше"),
        (
            "numeric",
            "Поле {field} может содержать только цифровые символы",
        ),
        ("one_of", "Поле {field} должно быть допустимым значением"),
        ("regex", "Поле {field} имеет ошибочный формат"),
        ("required", "Поле {field} обязательно для заполнения"),
        ("size", "Размер поля {field} должен быть меньше 0:{size}КБ"),
    ])
}
