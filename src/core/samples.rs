// MailTriage - core/samples.rs
//
// Built-in sample emails used by the `--example <key>` launch option to
// prefill the text panel. The texts are in Portuguese because that is the
// language the classification service is tuned for.

/// `(key, text)` pairs in menu order.
pub const SAMPLES: &[(&str, &str)] = &[
    (
        "status",
        "Olá, gostaria de saber o status da minha solicitação de protocolo #12345. \
         Já faz uma semana desde que enviei os documentos e não recebi nenhuma \
         atualização. Podem me informar quando terei uma resposta? Obrigado.",
    ),
    (
        "suporte",
        "Bom dia, estou com problema para acessar o sistema. Aparece erro de login \
         e não consigo entrar na minha conta. Podem me ajudar a resolver esse \
         problema técnico?",
    ),
    (
        "natal",
        "Feliz Natal para toda a equipe! Desejo um ano novo cheio de prosperidade \
         e sucesso para todos. Obrigado pelo excelente atendimento durante todo o ano.",
    ),
    (
        "agradecimento",
        "Muito obrigado pela atenção e pelo excelente atendimento recebido. Vocês \
         são uma equipe fantástica e estou muito satisfeito com o serviço.",
    ),
];

/// Look up a sample by key. Keys are matched exactly.
pub fn lookup(key: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, text)| *text)
}

/// All known keys, for help output and warnings.
pub fn keys() -> Vec<&'static str> {
    SAMPLES.iter().map(|(k, _)| *k).collect()
}
