//! Form validation rules shared by the auth and registration screens.

/// An OTP is submittable only when it is exactly six ASCII digits.
pub fn otp_is_valid(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}

/// Shape check only; the backend owns real address validation.
pub fn email_is_valid(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

/// Password strength classification.
///
/// Length >= 8 is mandatory: without it the password is
/// [`Self::VeryWeak`] no matter what else it contains. Beyond that, each
/// satisfied extra requirement (uppercase, lowercase, digit, special
/// character) moves the label up one band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn classify(password: &str) -> Self {
        if password.chars().count() < 8 {
            return Self::VeryWeak;
        }

        let extras = [
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_alphanumeric()),
        ]
        .iter()
        .filter(|&&satisfied| satisfied)
        .count();

        match extras {
            0 | 1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    /// 0..=4, used by the meter bar width.
    pub fn score(self) -> u8 {
        match self {
            Self::VeryWeak => 0,
            Self::Weak => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::Strong => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_length_gate() {
        assert!(otp_is_valid("123456"));
        assert!(!otp_is_valid("12345"));
        assert!(!otp_is_valid("1234567"));
        assert!(!otp_is_valid("12345a"));
        assert!(!otp_is_valid(""));
    }

    #[test]
    fn test_short_password_is_very_weak_regardless() {
        assert_eq!(PasswordStrength::classify("Ab1!"), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::classify(""), PasswordStrength::VeryWeak);
    }

    #[test]
    fn test_strength_bands() {
        // Only one extra satisfied (lowercase).
        assert_eq!(
            PasswordStrength::classify("abcdefgh"),
            PasswordStrength::Weak
        );
        // Two extras: upper + lower.
        assert_eq!(
            PasswordStrength::classify("Abcdefgh"),
            PasswordStrength::Fair
        );
        // Three extras: upper + lower + digit.
        assert_eq!(
            PasswordStrength::classify("Abcdefg1"),
            PasswordStrength::Good
        );
        // All four.
        assert_eq!(
            PasswordStrength::classify("Abcdef1!"),
            PasswordStrength::Strong
        );
    }

    #[test]
    fn test_strength_is_monotonic_in_satisfied_requirements() {
        let ladder = ["abcdefgh", "Abcdefgh", "Abcdefg1", "Abcdef1!"];
        let strengths: Vec<_> = ladder
            .iter()
            .map(|pw| PasswordStrength::classify(pw))
            .collect();
        assert!(strengths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_email_shape() {
        assert!(email_is_valid("user@example.com"));
        assert!(email_is_valid("  user@example.com  "));
        assert!(!email_is_valid("userexample.com"));
        assert!(!email_is_valid("   "));
    }
}
