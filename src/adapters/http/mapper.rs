//! Map wire DTOs to domain entities and back.
//!
//! Pure, total functions: field-for-field projection, no validation. List-wise
//! variants preserve input order and count; empty in, empty out.

use crate::adapters::http::dto::{
    AttachmentCountsDto, AttachmentsByTypeDto, CreatedTrelloCardDto, TaskDto, TrelloBadgesDto,
    TrelloBoardDto, TrelloCardDto, TrelloListDto,
};
use crate::domain::{
    CreatedTrelloCard, Task, TrelloBadges, TrelloBoard, TrelloCard, TrelloList,
};

pub fn task_from_dto(dto: TaskDto) -> Task {
    Task {
        id: dto.id,
        title: dto.title,
        content: dto.content,
    }
}

pub fn task_to_dto(task: Task) -> TaskDto {
    TaskDto {
        id: task.id,
        title: task.title,
        content: task.content,
    }
}

pub fn tasks_to_dto(tasks: Vec<Task>) -> Vec<TaskDto> {
    tasks.into_iter().map(task_to_dto).collect()
}

pub fn board_from_dto(dto: TrelloBoardDto) -> TrelloBoard {
    TrelloBoard {
        id: dto.id,
        name: dto.name,
        lists: lists_from_dto(dto.lists),
    }
}

pub fn board_to_dto(board: TrelloBoard) -> TrelloBoardDto {
    TrelloBoardDto {
        id: board.id,
        name: board.name,
        lists: lists_to_dto(board.lists),
    }
}

pub fn boards_from_dto(dtos: Vec<TrelloBoardDto>) -> Vec<TrelloBoard> {
    dtos.into_iter().map(board_from_dto).collect()
}

pub fn boards_to_dto(boards: Vec<TrelloBoard>) -> Vec<TrelloBoardDto> {
    boards.into_iter().map(board_to_dto).collect()
}

pub fn list_from_dto(dto: TrelloListDto) -> TrelloList {
    TrelloList {
        id: dto.id,
        name: dto.name,
        closed: dto.closed,
    }
}

pub fn list_to_dto(list: TrelloList) -> TrelloListDto {
    TrelloListDto {
        id: list.id,
        name: list.name,
        closed: list.closed,
    }
}

pub fn lists_from_dto(dtos: Vec<TrelloListDto>) -> Vec<TrelloList> {
    dtos.into_iter().map(list_from_dto).collect()
}

pub fn lists_to_dto(lists: Vec<TrelloList>) -> Vec<TrelloListDto> {
    lists.into_iter().map(list_to_dto).collect()
}

pub fn card_from_dto(dto: TrelloCardDto) -> TrelloCard {
    TrelloCard {
        name: dto.name,
        description: dto.description,
        pos: dto.pos,
        list_id: dto.list_id,
    }
}

pub fn card_to_dto(card: TrelloCard) -> TrelloCardDto {
    TrelloCardDto {
        name: card.name,
        description: card.description,
        pos: card.pos,
        list_id: card.list_id,
    }
}

pub fn created_card_to_dto(card: CreatedTrelloCard) -> CreatedTrelloCardDto {
    CreatedTrelloCardDto {
        id: card.id,
        name: card.name,
        short_url: card.short_url,
        badges: card.badges.map(badges_to_dto),
    }
}

fn badges_to_dto(badges: TrelloBadges) -> TrelloBadgesDto {
    TrelloBadgesDto {
        votes: badges.votes,
        attachments: AttachmentsByTypeDto {
            trello: AttachmentCountsDto {
                board: badges.attachments.trello.board,
                card: badges.attachments.trello.card,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AttachmentCounts, AttachmentsByType};

    fn task(id: i64) -> Task {
        Task {
            id: Some(id),
            title: "task".to_string(),
            content: "content".to_string(),
        }
    }

    #[test]
    fn task_round_trip_preserves_fields() {
        let original = task(1);
        let dto = task_to_dto(original.clone());
        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.title, "task");

        let back = task_from_dto(dto);
        assert_eq!(back, original);
    }

    #[test]
    fn task_round_trip_preserves_unassigned_id() {
        let original = Task {
            id: None,
            title: "new".to_string(),
            content: "c".to_string(),
        };
        assert_eq!(task_from_dto(task_to_dto(original.clone())), original);
    }

    #[test]
    fn task_list_mapping_preserves_count_and_order() {
        assert!(tasks_to_dto(Vec::new()).is_empty());

        let dtos = tasks_to_dto(vec![task(3), task(1), task(2)]);
        assert_eq!(dtos.len(), 3);
        assert_eq!(dtos[0].id, Some(3));
        assert_eq!(dtos[1].id, Some(1));
        assert_eq!(dtos[2].id, Some(2));
    }

    #[test]
    fn card_maps_both_directions() {
        let dto = TrelloCardDto {
            name: "name".to_string(),
            description: "desc".to_string(),
            pos: "pos".to_string(),
            list_id: "1".to_string(),
        };
        let card = card_from_dto(dto.clone());
        assert_eq!(card.name, "name");

        let back = card_to_dto(card);
        assert_eq!(back.name, "name");
        assert_eq!(back.list_id, "1");
        assert_eq!(back, dto);
    }

    #[test]
    fn board_mapping_carries_nested_lists() {
        let board = TrelloBoard {
            id: "1".to_string(),
            name: "name".to_string(),
            lists: vec![
                TrelloList {
                    id: "l1".to_string(),
                    name: "To do".to_string(),
                    closed: false,
                },
                TrelloList {
                    id: "l2".to_string(),
                    name: "Done".to_string(),
                    closed: true,
                },
            ],
        };

        let dtos = boards_to_dto(vec![board.clone()]);
        assert_eq!(dtos.len(), 1);
        assert_eq!(dtos[0].lists.len(), 2);
        assert_eq!(dtos[0].lists[0].id, "l1");
        assert!(dtos[0].lists[1].closed);

        let back = boards_from_dto(dtos);
        assert_eq!(back, vec![board]);
    }

    #[test]
    fn empty_board_and_list_mappings_stay_empty() {
        assert!(boards_to_dto(Vec::new()).is_empty());
        assert!(boards_from_dto(Vec::new()).is_empty());
        assert!(lists_to_dto(Vec::new()).is_empty());
        assert!(lists_from_dto(Vec::new()).is_empty());
    }

    #[test]
    fn created_card_maps_optional_badges() {
        let bare = CreatedTrelloCard {
            id: "1".to_string(),
            name: "Test Card".to_string(),
            short_url: "url".to_string(),
            badges: None,
        };
        assert!(created_card_to_dto(bare).badges.is_none());

        let with_badges = CreatedTrelloCard {
            id: "2".to_string(),
            name: "n".to_string(),
            short_url: "u".to_string(),
            badges: Some(TrelloBadges {
                votes: 5,
                attachments: AttachmentsByType {
                    trello: AttachmentCounts { board: 1, card: 2 },
                },
            }),
        };
        let dto = created_card_to_dto(with_badges);
        let badges = dto.badges.expect("badges");
        assert_eq!(badges.votes, 5);
        assert_eq!(badges.attachments.trello.card, 2);
    }
}
