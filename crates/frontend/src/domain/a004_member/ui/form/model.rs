use crate::shared::masks::{cep_mask, cpf_mask, phone_mask, remove_mask};
use chrono::NaiveDate;
use contracts::domain::a004_member::{Gender, Member, MemberPayload, MembershipStatus, MinisterialFunction};

/// Estado do formulário como o usuário vê (CPF/telefone/CEP com máscara)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberForm {
    pub full_name: String,
    pub cpf: String,
    pub phone: String,
    pub zipcode: String,
    pub email: String,
    /// `yyyy-mm-dd` do `<input type="date">`
    pub birth_date: String,
    pub gender: Option<Gender>,
    pub branch: Option<u64>,
    pub membership_status: MembershipStatus,
    pub ministerial_function: MinisterialFunction,
}

impl MemberForm {
    /// Preenche o formulário de edição com os campos já mascarados
    pub fn from_member(m: &Member) -> Self {
        Self {
            full_name: m.full_name.clone(),
            cpf: cpf_mask(&m.cpf),
            phone: phone_mask(&m.phone),
            zipcode: cep_mask(&m.address.zipcode),
            email: m.email.clone(),
            birth_date: m
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            gender: m.gender,
            branch: m.branch,
            membership_status: m.membership_status,
            ministerial_function: m.ministerial_function,
        }
    }

    pub fn to_payload(&self) -> Result<MemberPayload, String> {
        let birth_date = match self.birth_date.trim() {
            "" => None,
            s => Some(
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| "Data de nascimento inválida".to_string())?,
            ),
        };

        let payload = MemberPayload {
            full_name: self.full_name.trim().to_string(),
            cpf: remove_mask(&self.cpf),
            birth_date,
            gender: self.gender,
            email: self.email.trim().to_lowercase(),
            phone: remove_mask(&self.phone),
            zipcode: remove_mask(&self.zipcode),
            branch: self.branch,
            membership_status: self.membership_status,
            ministerial_function: self.ministerial_function,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_strips_masks() {
        let form = MemberForm {
            full_name: " Maria Lima ".into(),
            cpf: "123.456.789-00".into(),
            phone: "(11) 98765-4321".into(),
            zipcode: "01310-100".into(),
            email: "Maria@Igreja.org".into(),
            birth_date: "1985-03-20".into(),
            ..Default::default()
        };
        let p = form.to_payload().unwrap();
        assert_eq!(p.full_name, "Maria Lima");
        assert_eq!(p.cpf, "12345678900");
        assert_eq!(p.phone, "11987654321");
        assert_eq!(p.zipcode, "01310100");
        assert_eq!(p.email, "maria@igreja.org");
        assert_eq!(p.birth_date, NaiveDate::from_ymd_opt(1985, 3, 20));
    }

    #[test]
    fn test_from_member_masks_and_roundtrips() {
        let json = r#"{
            "id": 7, "church": 1, "branch": 3, "full_name": "Paulo Reis",
            "cpf": "98765432100", "phone": "1133334444", "zipcode": "20040002",
            "email": "paulo@igreja.org", "birth_date": "1979-11-02", "gender": "M",
            "membership_status": "inactive", "ministerial_function": "deacon"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        let form = MemberForm::from_member(&member);
        assert_eq!(form.cpf, "987.654.321-00");
        assert_eq!(form.phone, "(11) 3333-4444");
        assert_eq!(form.zipcode, "20040-002");
        assert_eq!(form.birth_date, "1979-11-02");
        assert_eq!(form.branch, Some(3));

        let p = form.to_payload().unwrap();
        assert_eq!(p.cpf, member.cpf);
        assert_eq!(p.phone, member.phone);
        assert_eq!(p.zipcode, "20040002");
        assert_eq!(p.birth_date, member.birth_date);
        assert_eq!(p.membership_status, member.membership_status);
        assert_eq!(p.ministerial_function, member.ministerial_function);
    }

    #[test]
    fn test_payload_errors() {
        let form = MemberForm {
            full_name: "João".into(),
            cpf: "123.456".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload().unwrap_err(), "CPF deve ter 11 dígitos");

        let form = MemberForm {
            full_name: "João".into(),
            birth_date: "20/03/1985".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload().unwrap_err(), "Data de nascimento inválida");
    }
}
