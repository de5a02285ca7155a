use alloc::string::String;

use crate::any::TypeInfo;

/// Lower-cases only the first character of `name`, the standard bean-naming
/// convention.
#[must_use]
pub(crate) fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(name.len());
    result.extend(first.to_lowercase());
    result.push_str(chars.as_str());
    result
}

/// Default bean name of a backing type: its simple name, decapitalized.
#[must_use]
pub(crate) fn default_bean_name(type_info: &TypeInfo) -> String {
    decapitalize(type_info.short_name())
}

#[cfg(test)]
mod tests {
    use super::{decapitalize, default_bean_name};
    use crate::any::TypeInfo;

    struct OrderService;

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("OrderService"), "orderService");
        assert_eq!(decapitalize("orderService"), "orderService");
        assert_eq!(decapitalize("X"), "x");
        assert_eq!(decapitalize(""), "");
        // only the first character is lowered
        assert_eq!(decapitalize("URLParser"), "uRLParser");
    }

    #[test]
    fn test_default_bean_name() {
        assert_eq!(default_bean_name(&TypeInfo::of::<OrderService>()), "orderService");
    }
}
