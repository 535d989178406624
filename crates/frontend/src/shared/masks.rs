//! Máscaras de exibição para CEP, telefone e CPF.
//!
//! Todas são funções puras sobre strings arbitrárias: extraem os dígitos e
//! formatam conforme a quantidade digitada. O valor canônico (só dígitos) é
//! recuperado com [`remove_mask`] antes de enviar ao backend.

const CEP_DIGITS: usize = 8;
const PHONE_DIGITS: usize = 11;
const CPF_DIGITS: usize = 11;

/// Remove tudo que não for dígito ASCII
pub fn remove_mask(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn digits(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// `NNNNN-NNN`
pub fn cep_mask(value: &str) -> String {
    let d = digits(value, CEP_DIGITS);
    if d.len() <= 5 {
        return d;
    }
    format!("{}-{}", &d[..5], &d[5..])
}

/// `(DD) DDDD-DDDD` para fixo, `(DD) DDDDD-DDDD` para celular.
///
/// Formatação progressiva: até 2 dígitos sem máscara, até 6 só o DDD,
/// de 7 a 10 fixo, 11 celular.
pub fn phone_mask(value: &str) -> String {
    let d = digits(value, PHONE_DIGITS);
    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// `NNN.NNN.NNN-NN`
pub fn cpf_mask(value: &str) -> String {
    let d = digits(value, CPF_DIGITS);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Tipo de máscara aplicada por `MaskedInput`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Cep,
    Phone,
    Cpf,
}

impl MaskKind {
    pub fn apply(self, value: &str) -> String {
        match self {
            MaskKind::Cep => cep_mask(value),
            MaskKind::Phone => phone_mask(value),
            MaskKind::Cpf => cpf_mask(value),
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            MaskKind::Cep => "00000-000",
            MaskKind::Phone => "(00) 00000-0000",
            MaskKind::Cpf => "000.000.000-00",
        }
    }

    /// Comprimento máximo do texto mascarado (para `maxlength`)
    pub fn max_len(self) -> usize {
        match self {
            MaskKind::Cep => 9,
            MaskKind::Phone => 15,
            MaskKind::Cpf => 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "abc",
        "0",
        "0100",
        "01001",
        "010010",
        "01001000",
        "01001-000",
        "010010009999",
        " 12.345-678 x ",
        "١٢٣",
        "CEP: 70.040-010 (Brasília)",
    ];

    #[test]
    fn test_cep_mask() {
        assert_eq!(cep_mask("01001000"), "01001-000");
        assert_eq!(cep_mask("0100"), "0100");
        assert_eq!(cep_mask("01001"), "01001");
        assert_eq!(cep_mask("010010"), "01001-0");
        assert_eq!(cep_mask("0100100099"), "01001-000");
        assert_eq!(cep_mask(""), "");
    }

    #[test]
    fn test_cep_mask_preserves_digits() {
        for s in SAMPLES {
            let expected: String = remove_mask(s).chars().take(8).collect();
            assert_eq!(remove_mask(&cep_mask(s)), expected, "input {:?}", s);
        }
    }

    #[test]
    fn test_phone_mask_breakpoints() {
        assert_eq!(phone_mask(""), "");
        assert_eq!(phone_mask("1"), "1");
        assert_eq!(phone_mask("11"), "11");
        assert_eq!(phone_mask("119"), "(11) 9");
        assert_eq!(phone_mask("119876"), "(11) 9876");
        assert_eq!(phone_mask("1198765"), "(11) 9876-5");
        assert_eq!(phone_mask("1133334444"), "(11) 3333-4444");
        assert_eq!(phone_mask("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_phone_mask_ignores_extra_digits_and_noise() {
        assert_eq!(phone_mask("(11) 98765-43219999"), "(11) 98765-4321");
        assert_eq!(phone_mask("+55"), "55");
    }

    #[test]
    fn test_cpf_mask() {
        assert_eq!(cpf_mask("12345678900"), "123.456.789-00");
        assert_eq!(cpf_mask("123"), "123");
        assert_eq!(cpf_mask("1234"), "123.4");
        assert_eq!(cpf_mask("1234567"), "123.456.7");
        assert_eq!(cpf_mask("1234567890"), "123.456.789-0");
        assert_eq!(cpf_mask("123456789001234"), "123.456.789-00");
        assert_eq!(cpf_mask("123.456.789-00"), "123.456.789-00");
    }

    #[test]
    fn test_remove_mask() {
        assert_eq!(remove_mask("(11) 98765-4321"), "11987654321");
        assert_eq!(remove_mask("123.456.789-00"), "12345678900");
        assert_eq!(remove_mask(""), "");
        assert_eq!(remove_mask("sem dígitos"), "");
    }

    #[test]
    fn test_masks_are_total() {
        for s in SAMPLES {
            for kind in [MaskKind::Cep, MaskKind::Phone, MaskKind::Cpf] {
                let masked = kind.apply(s);
                assert!(masked.len() <= kind.max_len(), "{:?} {:?}", kind, s);
                // reaplicar a máscara não muda o resultado
                assert_eq!(kind.apply(&masked), masked);
            }
        }
    }
}
