use super::model::MemberForm;
use crate::domain::a003_branch::api as branch_api;
use crate::domain::a004_member::api;
use contracts::domain::a003_branch::Branch;
use contracts::domain::a004_member::Member;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct MemberFormViewModel {
    pub form: RwSignal<MemberForm>,
    pub branches: RwSignal<Vec<Branch>>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    pub is_loading: RwSignal<bool>,
    /// `None` é cadastro novo
    pub member_id: Option<u64>,
}

impl MemberFormViewModel {
    pub fn new(member_id: Option<u64>) -> Self {
        Self {
            form: RwSignal::new(MemberForm::default()),
            branches: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            is_loading: RwSignal::new(false),
            member_id,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.member_id.is_some()
    }

    /// Carrega o membro em edição; `on_loaded` recebe o formulário preenchido
    pub fn load_command(&self, on_loaded: impl FnOnce(&MemberForm) + 'static) {
        let Some(id) = self.member_id else {
            return;
        };
        let (form, error, is_loading) = (self.form, self.error, self.is_loading);
        is_loading.set(true);
        spawn_local(async move {
            match api::get_member(id).await {
                Ok(member) => {
                    let loaded = MemberForm::from_member(&member);
                    on_loaded(&loaded);
                    form.set(loaded);
                }
                Err(e) => {
                    log::error!("membro {}: {}", id, e);
                    error.set(Some(e));
                }
            }
            is_loading.set(false);
        });
    }

    pub fn load_branches(&self) {
        let branches = self.branches;
        spawn_local(async move {
            match branch_api::list_branches().await {
                Ok(page) => branches.set(page.results),
                Err(e) => log::warn!("filiais indisponíveis: {}", e),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<Member>) {
        let payload = match self.form.with_untracked(MemberForm::to_payload) {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let (error, is_saving, member_id) = (self.error, self.is_saving, self.member_id);
        is_saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match member_id {
                Some(id) => api::update_member(id, &payload).await,
                None => api::create_member(&payload).await,
            };
            match result {
                Ok(member) => on_saved.run(member),
                Err(e) => error.set(Some(e)),
            }
            is_saving.set(false);
        });
    }
}

/// Título do cartão do formulário
pub fn form_title(member_id: Option<u64>) -> &'static str {
    if member_id.is_some() {
        "Editar membro"
    } else {
        "Novo membro"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_title() {
        assert_eq!(form_title(None), "Novo membro");
        assert_eq!(form_title(Some(12)), "Editar membro");
    }
}
