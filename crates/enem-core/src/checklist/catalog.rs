use super::{ChecklistItem, InfoSource, ItemInfo, ItemPhase};

const fn manual(page: u16) -> InfoSource {
    InfoSource {
        manual: "Coordenador",
        page,
    }
}

pub static CATALOG: &[ChecklistItem] = &[
    // Preparação (dias anteriores)
    ChecklistItem {
        id: "prep-01",
        text: "Realizar visita técnica ao local de aplicação",
        phase: ItemPhase::Preparation,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: Some(ItemInfo {
            title: "Visita técnica",
            body: "Verifique acessos, salas, banheiros, iluminação e condições gerais do prédio.",
            source: manual(12),
        }),
    },
    ChecklistItem {
        id: "prep-02",
        text: "Confirmar equipe de colaboradores e escalas por sala",
        phase: ItemPhase::Preparation,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "prep-03",
        text: "Conferir ensalamento e listas de presença",
        phase: ItemPhase::Preparation,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: Some(ItemInfo {
            title: "Ensalamento",
            body: "Compare o número de salas e participantes com o relatório oficial do local.",
            source: manual(15),
        }),
    },
    ChecklistItem {
        id: "prep-04",
        text: "Verificar sala de atendimento especializado e recursos de acessibilidade",
        phase: ItemPhase::Preparation,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "prep-05",
        text: "Realizar capacitação da equipe de aplicação",
        phase: ItemPhase::Preparation,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "prep-06",
        text: "Confirmar contato com a equipe de segurança e o certificador",
        phase: ItemPhase::Preparation,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "prep-07",
        text: "Testar detectores de metal e organizar o kit de materiais",
        phase: ItemPhase::Preparation,
        role: "Chefe de Sala",
        suggested_time: None,
        critical: false,
        info: None,
    },
    // Manhã do exame
    ChecklistItem {
        id: "man-01",
        text: "Chegar ao local de aplicação",
        phase: ItemPhase::Morning,
        role: "Coordenador",
        suggested_time: Some("07:30"),
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "man-02",
        text: "Receber malotes de provas e conferir lacres",
        phase: ItemPhase::Morning,
        role: "Coordenador",
        suggested_time: Some("08:00"),
        critical: true,
        info: Some(ItemInfo {
            title: "Recebimento dos malotes",
            body: "Confira a integridade dos lacres na presença do certificador e registre qualquer divergência.",
            source: manual(31),
        }),
    },
    ChecklistItem {
        id: "man-03",
        text: "Reunir a equipe e distribuir funções",
        phase: ItemPhase::Morning,
        role: "Coordenador",
        suggested_time: Some("09:00"),
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "man-04",
        text: "Entregar materiais aos chefes de sala",
        phase: ItemPhase::Morning,
        role: "Coordenador",
        suggested_time: Some("11:00"),
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "man-05",
        text: "Abrir os portões",
        phase: ItemPhase::Morning,
        role: "Coordenador",
        suggested_time: Some("12:00"),
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "man-06",
        text: "Fechar os portões no horário oficial",
        phase: ItemPhase::Morning,
        role: "Coordenador",
        suggested_time: Some("13:00"),
        critical: true,
        info: Some(ItemInfo {
            title: "Fechamento dos portões",
            body: "Os portões fecham às 13h (horário de Brasília). Nenhum participante entra após o fechamento.",
            source: manual(38),
        }),
    },
    // Durante a aplicação
    ChecklistItem {
        id: "dur-01",
        text: "Autorizar o início das provas",
        phase: ItemPhase::During,
        role: "Coordenador",
        suggested_time: Some("13:30"),
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "dur-02",
        text: "Percorrer as salas e acompanhar a aplicação",
        phase: ItemPhase::During,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "dur-03",
        text: "Liberar saída definitiva após duas horas de prova",
        phase: ItemPhase::During,
        role: "Chefe de Sala",
        suggested_time: Some("15:30"),
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "dur-04",
        text: "Liberar saída com caderno de questões nos últimos 30 minutos",
        phase: ItemPhase::During,
        role: "Chefe de Sala",
        suggested_time: None,
        critical: false,
        info: None,
    },
    // Encerramento
    ChecklistItem {
        id: "enc-01",
        text: "Recolher cartões-resposta e folhas de redação",
        phase: ItemPhase::Closing,
        role: "Chefe de Sala",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "enc-02",
        text: "Conferir listas de presença assinadas",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "enc-03",
        text: "Lacrar envelopes de retorno na presença de participantes",
        phase: ItemPhase::Closing,
        role: "Chefe de Sala",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "enc-04",
        text: "Conferir materiais devolvidos por sala",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "enc-05",
        text: "Registrar ocorrências na ata de sala",
        phase: ItemPhase::Closing,
        role: "Chefe de Sala",
        suggested_time: None,
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "enc-06",
        text: "Preencher a ata do coordenador",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "enc-07",
        text: "Organizar malotes para devolução",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "enc-08",
        text: "Entregar malotes ao certificador",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: true,
        info: None,
    },
    ChecklistItem {
        id: "enc-09",
        text: "Dispensar a equipe de aplicação",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: None,
    },
    ChecklistItem {
        id: "enc-10",
        text: "Verificar fechamento das salas e condições do prédio",
        phase: ItemPhase::Closing,
        role: "Coordenador",
        suggested_time: None,
        critical: false,
        info: Some(ItemInfo {
            title: "Encerramento do local",
            body: "Confirme salas vazias, trancadas e prédio em condições adequadas.",
            source: manual(64),
        }),
    },
];
