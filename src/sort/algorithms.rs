//! 六种排序算法的原地实现
//!
//! 比较不会修改序列也不会通知观察者；每次交换或写入之后恰好通知一次。

use super::{Mutation, SortObserver};

fn swap<O: SortObserver>(
    data: &mut [u32],
    a: usize,
    b: usize,
    observer: &mut O,
) -> Result<(), O::Error> {
    data.swap(a, b);
    observer.observe(data, Mutation::Swap(a, b))
}

fn write<O: SortObserver>(
    data: &mut [u32],
    index: usize,
    value: u32,
    observer: &mut O,
) -> Result<(), O::Error> {
    data[index] = value;
    observer.observe(data, Mutation::Write(index))
}

/// 冒泡排序：每一轮把最大值冒到未排序区末尾
pub fn bubble_sort<O: SortObserver>(data: &mut [u32], observer: &mut O) -> Result<(), O::Error> {
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            if data[j] > data[j + 1] {
                swap(data, j, j + 1, observer)?;
            }
        }
    }
    Ok(())
}

/// 选择排序：即使最小值就在当前位置也会通知一次
pub fn selection_sort<O: SortObserver>(
    data: &mut [u32],
    observer: &mut O,
) -> Result<(), O::Error> {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..len {
            if data[j] < data[min_index] {
                min_index = j;
            }
        }
        swap(data, i, min_index, observer)?;
    }
    Ok(())
}

/// 插入排序：逐个右移较大的前驱，再放入当前值
pub fn insertion_sort<O: SortObserver>(
    data: &mut [u32],
    observer: &mut O,
) -> Result<(), O::Error> {
    for i in 1..data.len() {
        let key = data[i];
        // hole 是待放入的位置
        let mut hole = i;
        while hole > 0 && data[hole - 1] > key {
            data[hole] = data[hole - 1];
            observer.observe(
                data,
                Mutation::Shift {
                    from: hole - 1,
                    to: hole,
                },
            )?;
            hole -= 1;
        }
        write(data, hole, key, observer)?;
    }
    Ok(())
}

/// 归并排序（自顶向下，左半部分取 ⌈n/2⌉ 个元素）
pub fn merge_sort<O: SortObserver>(data: &mut [u32], observer: &mut O) -> Result<(), O::Error> {
    merge_sort_range(data, 0, data.len(), observer)
}

fn merge_sort_range<O: SortObserver>(
    data: &mut [u32],
    lo: usize,
    hi: usize,
    observer: &mut O,
) -> Result<(), O::Error> {
    if hi - lo < 2 {
        return Ok(());
    }
    let mid = lo + (hi - lo).div_ceil(2);
    merge_sort_range(data, lo, mid, observer)?;
    merge_sort_range(data, mid, hi, observer)?;
    merge(data, lo, mid, hi, observer)
}

fn merge<O: SortObserver>(
    data: &mut [u32],
    lo: usize,
    mid: usize,
    hi: usize,
    observer: &mut O,
) -> Result<(), O::Error> {
    let left = data[lo..mid].to_vec();
    let right = data[mid..hi].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in lo..hi {
        // 相等时取左侧
        let take_left = j >= right.len() || (i < left.len() && left[i] <= right[j]);
        let value = if take_left {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        write(data, k, value, observer)?;
    }
    Ok(())
}

/// 快速排序（Lomuto 划分，以最后一个元素为基准）
pub fn quick_sort<O: SortObserver>(data: &mut [u32], observer: &mut O) -> Result<(), O::Error> {
    quick_sort_range(data, 0, data.len(), observer)
}

fn quick_sort_range<O: SortObserver>(
    data: &mut [u32],
    lo: usize,
    hi: usize,
    observer: &mut O,
) -> Result<(), O::Error> {
    if hi - lo < 2 {
        return Ok(());
    }
    let pivot_index = partition(data, lo, hi, observer)?;
    quick_sort_range(data, lo, pivot_index, observer)?;
    quick_sort_range(data, pivot_index + 1, hi, observer)
}

/// 划分 [lo, hi)，返回基准的最终位置
fn partition<O: SortObserver>(
    data: &mut [u32],
    lo: usize,
    hi: usize,
    observer: &mut O,
) -> Result<usize, O::Error> {
    let last = hi - 1;
    let pivot = data[last];
    let mut store = lo;
    for j in lo..last {
        if data[j] < pivot {
            swap(data, store, j, observer)?;
            store += 1;
        }
    }
    swap(data, store, last, observer)?;
    Ok(store)
}

/// 堆排序：先建大顶堆，再依次把堆顶换到末尾
pub fn heap_sort<O: SortObserver>(data: &mut [u32], observer: &mut O) -> Result<(), O::Error> {
    let len = data.len();
    for root in (0..len / 2).rev() {
        sift_down(data, len, root, observer)?;
    }
    for end in (1..len).rev() {
        swap(data, 0, end, observer)?;
        sift_down(data, end, 0, observer)?;
    }
    Ok(())
}

/// 在前 `len` 个元素构成的堆中下沉 `root`
fn sift_down<O: SortObserver>(
    data: &mut [u32],
    len: usize,
    mut root: usize,
    observer: &mut O,
) -> Result<(), O::Error> {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && data[left] > data[largest] {
            largest = left;
        }
        if right < len && data[right] > data[largest] {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }
        swap(data, root, largest, observer)?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Recorder;
    use super::*;

    #[test]
    fn test_bubble_sort_swap_order() {
        let mut data = vec![5, 3, 8, 1];
        let mut recorder = Recorder::default();
        bubble_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 3, 5, 8]);
        assert_eq!(
            recorder.events,
            vec![
                Mutation::Swap(0, 1),
                Mutation::Swap(2, 3),
                Mutation::Swap(1, 2),
                Mutation::Swap(0, 1),
            ]
        );
        assert_eq!(recorder.frames[1], vec![3, 5, 1, 8]);
    }

    #[test]
    fn test_selection_sort_notifies_noop_swaps() {
        let mut data = vec![1, 2, 3];
        let mut recorder = Recorder::default();
        selection_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(
            recorder.events,
            vec![Mutation::Swap(0, 0), Mutation::Swap(1, 1)]
        );
    }

    #[test]
    fn test_insertion_sort_shifts_then_places() {
        let mut data = vec![2, 3, 1];
        let mut recorder = Recorder::default();
        insertion_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(
            recorder.events,
            vec![
                Mutation::Write(1),
                Mutation::Shift { from: 1, to: 2 },
                Mutation::Shift { from: 0, to: 1 },
                Mutation::Write(0),
            ]
        );
        // 右移后值会暂时重复
        assert_eq!(recorder.frames[1], vec![2, 3, 3]);
    }

    #[test]
    fn test_merge_sort_writes_every_position() {
        let mut data = vec![4, 1, 3, 2];
        let mut recorder = Recorder::default();
        merge_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 2, 3, 4]);
        // [4,1] 和 [3,2] 各写 2 次，最后合并写 4 次
        let written: Vec<_> = recorder.events.iter().copied().collect();
        assert_eq!(
            written,
            vec![
                Mutation::Write(0),
                Mutation::Write(1),
                Mutation::Write(2),
                Mutation::Write(3),
                Mutation::Write(0),
                Mutation::Write(1),
                Mutation::Write(2),
                Mutation::Write(3),
            ]
        );
    }

    #[test]
    fn test_merge_sort_odd_split() {
        let mut data = vec![3, 2, 1];
        let mut recorder = Recorder::default();
        merge_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 2, 3]);
        // 左半 [3,2] 先合并，然后整体合并
        assert_eq!(recorder.frames[1], vec![2, 3, 1]);
        assert_eq!(recorder.events.len(), 5);
    }

    #[test]
    fn test_quick_sort_lomuto_swaps() {
        let mut data = vec![3, 1, 2];
        let mut recorder = Recorder::default();
        quick_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 2, 3]);
        // 基准 2：1 < 2 时交换 (0,1)，最后基准交换 (1,2)
        assert_eq!(recorder.events[0], Mutation::Swap(0, 1));
        assert_eq!(recorder.events[1], Mutation::Swap(1, 2));
        assert_eq!(recorder.events.len(), 2);
    }

    #[test]
    fn test_heap_sort_root_swaps() {
        let mut data = vec![1, 2, 3];
        let mut recorder = Recorder::default();
        heap_sort(&mut data, &mut recorder).unwrap();

        assert_eq!(data, vec![1, 2, 3]);
        // 建堆 (0,2) -> [3,2,1]；(0,2) -> [1,2,3]；下沉 (0,1) -> [2,1,3]；(0,1) -> [1,2,3]
        assert_eq!(
            recorder.events,
            vec![
                Mutation::Swap(0, 2),
                Mutation::Swap(0, 2),
                Mutation::Swap(0, 1),
                Mutation::Swap(0, 1),
            ]
        );
    }

    #[test]
    fn test_reverse_input() {
        let input: Vec<u32> = (1..=50).rev().collect();
        let expected: Vec<u32> = (1..=50).collect();
        let sorts: [fn(&mut [u32], &mut Recorder) -> Result<(), std::convert::Infallible>; 6] = [
            bubble_sort,
            selection_sort,
            insertion_sort,
            merge_sort,
            quick_sort,
            heap_sort,
        ];
        for sort in sorts {
            let mut data = input.clone();
            sort(&mut data, &mut Recorder::default()).unwrap();
            assert_eq!(data, expected);
        }
    }
}
