use serde::{Deserialize, Serialize};

/// Aggregate performance of one calling list, as returned by `/listas`.
/// Read-only snapshot; never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStat {
    pub id: i64,
    pub lista_id: String,
    pub lista_nome: String,
    pub lista_data: String,
    pub lista_quantidade: i64,
    pub total_discado: i64,
    pub total_atendido: i64,
    pub total_digito: i64,
    pub emp_nome: String,
    pub usr_nome: String,
}

/// Sums of enrolled contacts and dialed calls over the current list-stats
/// set. Computed at render time, never cached.
pub fn list_totals(stats: &[ListStat]) -> (i64, i64) {
    stats.iter().fold((0, 0), |(quantity, dialed), stat| {
        (quantity + stat.lista_quantidade, dialed + stat.total_discado)
    })
}

#[cfg(test)]
pub(crate) fn sample_list_stat(id: i64, name: &str, quantity: i64, dialed: i64) -> ListStat {
    ListStat {
        id,
        lista_id: format!("L{id}"),
        lista_nome: name.to_string(),
        lista_data: "2024-01-10".to_string(),
        lista_quantidade: quantity,
        total_discado: dialed,
        total_atendido: dialed / 2,
        total_digito: dialed / 4,
        emp_nome: "Portas de Aço".to_string(),
        usr_nome: "Carlos".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_quantity_and_dialed() {
        let stats = vec![
            sample_list_stat(1, "Base_SP", 1000, 600),
            sample_list_stat(2, "Base_RJ", 500, 200),
        ];
        assert_eq!(list_totals(&stats), (1500, 800));
    }

    #[test]
    fn totals_of_empty_set_are_zero() {
        assert_eq!(list_totals(&[]), (0, 0));
    }
}
