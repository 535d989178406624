use super::view_model::{form_title, MemberFormViewModel};
use crate::shared::components::{ChoiceSelect, MaskedInput};
use crate::shared::icons::icon;
use crate::shared::masks::MaskKind;
use contracts::domain::a004_member::{Gender, Member, MembershipStatus, MinisterialFunction};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Cadastro e edição de membro. CPF, telefone e CEP são mascarados na digitação.
#[component]
pub fn MemberForm(
    member_id: Option<u64>,
    on_saved: Callback<Member>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = MemberFormViewModel::new(member_id);
    vm.load_branches();
    let form = vm.form;

    let cpf = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let zipcode = RwSignal::new(String::new());
    let status = RwSignal::new(Some(MembershipStatus::Active));
    let function = RwSignal::new(Some(MinisterialFunction::Member));

    // campos mascarados vivem fora de `form` até o submit
    vm.load_command(move |loaded| {
        cpf.set(loaded.cpf.clone());
        phone.set(loaded.phone.clone());
        zipcode.set(loaded.zipcode.clone());
        status.set(Some(loaded.membership_status));
        function.set(Some(loaded.ministerial_function));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            f.cpf = cpf.get_untracked();
            f.phone = phone.get_untracked();
            f.zipcode = zipcode.get_untracked();
            f.membership_status = status.get_untracked().unwrap_or_default();
            f.ministerial_function = function.get_untracked().unwrap_or_default();
        });
        vm.save_command(on_saved);
    };

    let disabled = Signal::derive(move || vm.is_saving.get() || vm.is_loading.get());

    view! {
        <div class="details-container member-form">
            <div class="details-header">
                <h3>{form_title(member_id)}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error-message" role="alert">{e}</div> })}

            <form class="details-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="member-name">"Nome completo"</label>
                    <input
                        type="text"
                        id="member-name"
                        required
                        prop:value=move || form.with(|f| f.full_name.clone())
                        on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        disabled=move || disabled.get()
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="member-cpf">"CPF"</label>
                        <MaskedInput kind=MaskKind::Cpf value=cpf id="member-cpf" disabled=disabled />
                    </div>
                    <div class="form-group">
                        <label for="member-birth">"Nascimento"</label>
                        <input
                            type="date"
                            id="member-birth"
                            prop:value=move || form.with(|f| f.birth_date.clone())
                            on:input=move |ev| form.update(|f| f.birth_date = event_target_value(&ev))
                            disabled=move || disabled.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="member-gender">"Sexo"</label>
                        <select
                            id="member-gender"
                            class="form-select"
                            on:change=move |ev| {
                                let gender = match event_target_value(&ev).as_str() {
                                    "M" => Some(Gender::Male),
                                    "F" => Some(Gender::Female),
                                    _ => None,
                                };
                                form.update(|f| f.gender = gender);
                            }
                            disabled=move || disabled.get()
                        >
                            <option value="">"-"</option>
                            <option value="M" selected=move || form.with(|f| f.gender == Some(Gender::Male))>
                                "Masculino"
                            </option>
                            <option value="F" selected=move || form.with(|f| f.gender == Some(Gender::Female))>
                                "Feminino"
                            </option>
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="member-phone">"Telefone"</label>
                        <MaskedInput kind=MaskKind::Phone value=phone id="member-phone" disabled=disabled />
                    </div>
                    <div class="form-group">
                        <label for="member-email">"E-mail"</label>
                        <input
                            type="email"
                            id="member-email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            disabled=move || disabled.get()
                        />
                    </div>
                    <div class="form-group">
                        <label for="member-cep">"CEP"</label>
                        <MaskedInput kind=MaskKind::Cep value=zipcode id="member-cep" disabled=disabled />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="member-branch">"Filial"</label>
                        <select
                            id="member-branch"
                            class="form-select"
                            on:change=move |ev| {
                                let branch = event_target_value(&ev).parse::<u64>().ok();
                                form.update(|f| f.branch = branch);
                            }
                            disabled=move || disabled.get()
                        >
                            <option value="">"Sede"</option>
                            <For
                                each=move || vm.branches.get()
                                key=|b| b.id
                                children=move |b| {
                                    let id = b.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || form.with(|f| f.branch == Some(id))
                                        >
                                            {b.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="member-status">"Situação"</label>
                        <ChoiceSelect value=status id="member-status" disabled=disabled />
                    </div>
                    <div class="form-group">
                        <label for="member-function">"Função"</label>
                        <ChoiceSelect value=function id="member-function" disabled=disabled />
                    </div>
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || disabled.get()>
                        {icon("check")}
                        {move || if disabled.get() { " Salvando..." } else { " Salvar" }}
                    </button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </Button>
                </div>
            </form>
        </div>
    }
}
