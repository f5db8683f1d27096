use crate::domain::models::todo::Todo as DomainTodo;

pub struct TodoMapper;

impl TodoMapper {
    /// Convert domain Todo to shared Todo DTO
    pub fn to_dto(domain: DomainTodo) -> shared::Todo {
        shared::Todo {
            id: domain.id,
            title: domain.title,
            completed: domain.completed,
            created_at: domain.created_at,
        }
    }

    pub fn to_dto_list(domain_todos: Vec<DomainTodo>) -> Vec<shared::Todo> {
        domain_todos.into_iter().map(Self::to_dto).collect()
    }
}
